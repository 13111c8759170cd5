//! File upload component.
//!
//! Handles file selection, submission to the backend, and the status line.

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};

use crate::services::clean_file;
use crate::{UploadState, BACKEND_URL, MAX_FILE_SIZE};

/// File currently chosen in the page's file input, if any.
fn selected_file() -> Option<File> {
    let document = web_sys::window()?.document()?;
    let input = document.get_element_by_id("fileInput")?;
    let input = input.dyn_ref::<HtmlInputElement>()?;
    input.files()?.get(0)
}

#[component]
pub fn UploadSection(
    upload_state: ReadSignal<UploadState>,
    set_upload_state: WriteSignal<UploadState>,
) -> impl IntoView {
    // Handler for the Clean Data button
    let on_clean_click = move |_| {
        // One request at a time: while a request is in flight the button is
        // disabled, and a click that slips through is ignored.
        if upload_state.get().is_uploading() {
            return;
        }

        let Some(file) = selected_file() else {
            // No file chosen: blocking alert, no network call, nothing else
            // changes on the page.
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Upload file first");
            }
            return;
        };

        log::info!("📤 Uploading {} ({} bytes)...", file.name(), file.size() as u64);

        // Entering Uploading hides any stale download link and report
        set_upload_state.set(UploadState::Uploading);

        spawn_local(async move {
            match clean_file(file, BACKEND_URL).await {
                Ok(response) => {
                    log::info!(
                        "✅ {} ({} -> {} rows)",
                        response.message,
                        response.report.rows_before,
                        response.report.rows_after
                    );
                    set_upload_state.set(UploadState::Complete(response));
                }
                Err(e) => {
                    log::error!("❌ Cleaning failed: {}", e);
                    set_upload_state.set(UploadState::Failed(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <div class="upload-icon">"🧹"</div>
            <div class="upload-controls">
                <input
                    type="file"
                    id="fileInput"
                    accept=".csv,.xlsx,.xls"
                />
                <button
                    class="btn btn-primary"
                    id="cleanBtn"
                    on:click=on_clean_click
                    disabled=move || upload_state.get().is_uploading()
                >
                    {move || if upload_state.get().is_uploading() {
                        "Cleaning..."
                    } else {
                        "Clean Data"
                    }}
                </button>
            </div>
            <div class="upload-hint">
                {format!(
                    "CSV or Excel (.csv, .xlsx, .xls), up to {} MB",
                    MAX_FILE_SIZE / (1024 * 1024)
                )}
            </div>

            <div class="status" id="status">
                {move || upload_state.get().status_text()}
            </div>

            <Show
                when=move || upload_state.get().error_detail().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || upload_state.get().error_detail().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
