//! Result section: download link and cleaning report.
//!
//! Rendered entirely from the latest [`UploadState`] - the whole section is
//! hidden until a response lands, and a new submission hides it again.

use leptos::*;

use crate::types::yes_no;
use crate::{UploadState, BACKEND_URL};

#[component]
pub fn ResultSection(upload_state: ReadSignal<UploadState>) -> impl IntoView {
    let response = move || upload_state.get().response();
    let report = move || upload_state.get().report();

    view! {
        <Show
            when=move || response().is_some()
            fallback=|| view! { }
        >
            <div class="result-section">
                <a
                    class="download-link"
                    id="downloadLink"
                    href=move || {
                        response()
                            .map(|r| r.download_url(BACKEND_URL))
                            .unwrap_or_default()
                    }
                >
                    "Download Cleaned File"
                </a>

                <div class="report-box" id="reportBox">
                    <div class="report-title">"🧾 Cleaning Report"</div>

                    <div class="report-row">
                        <span class="report-label">"Rows before:"</span>
                        <span class="report-value" id="rowsBefore">
                            {move || report().map(|r| r.rows_before.to_string())}
                        </span>
                    </div>
                    <div class="report-row">
                        <span class="report-label">"Rows after:"</span>
                        <span class="report-value" id="rowsAfter">
                            {move || report().map(|r| r.rows_after.to_string())}
                        </span>
                    </div>
                    <div class="report-row">
                        <span class="report-label">"Duplicates removed:"</span>
                        <span class="report-value" id="duplicatesRemoved">
                            {move || report().map(|r| r.duplicates_removed.to_string())}
                        </span>
                    </div>
                    <div class="report-row">
                        <span class="report-label">"Null rows removed:"</span>
                        <span class="report-value" id="nullRowsRemoved">
                            {move || report().map(|r| r.null_rows_removed.to_string())}
                        </span>
                    </div>

                    // Variant fields: only rendered when the service reports them
                    <Show
                        when=move || report().and_then(|r| r.anomalies_removed).is_some()
                        fallback=|| view! { }
                    >
                        <div class="report-row">
                            <span class="report-label">"Anomalies removed:"</span>
                            <span class="report-value" id="anomaliesRemoved">
                                {move || {
                                    report()
                                        .and_then(|r| r.anomalies_removed)
                                        .map(|v| v.to_string())
                                }}
                            </span>
                        </div>
                    </Show>
                    <Show
                        when=move || report().and_then(|r| r.columns_standardized).is_some()
                        fallback=|| view! { }
                    >
                        <div class="report-row">
                            <span class="report-label">"Columns standardized:"</span>
                            <span class="report-value" id="columnsStandardized">
                                {move || {
                                    report()
                                        .and_then(|r| r.columns_standardized)
                                        .map(yes_no)
                                }}
                            </span>
                        </div>
                    </Show>

                    <div class="report-row">
                        <span class="report-label">"File auto-deletes in (s):"</span>
                        <span class="report-value" id="autoDelete">
                            {move || report().map(|r| r.file_auto_deleted_in_seconds.to_string())}
                        </span>
                    </div>
                </div>
            </div>
        </Show>
    }
}
