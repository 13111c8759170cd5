//! CleanSheet - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading messy CSV/Excel files to the
//! CleanSheet cleaning service and rendering the cleaning report.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand bar)                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file input, status line)                │
//! │  └── ResultSection (download link + report, when ready)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (CleanResponse, UploadState, etc.)
//! - [`components`] - UI components (Header, Upload, Result, etc.)
//! - [`services`] - Backend communication (clean-data endpoint)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    CleanReport, CleanResponse,
    // View state
    UploadState,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🧹 CleanSheet - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="CleanSheet - Smart Data Cleaner"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The one piece of page state: outcome of the latest upload.
    // Each submission fully replaces it, so no stale results survive.
    let (upload_state, set_upload_state) = create_signal(UploadState::Idle);

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <UploadSection
                upload_state=upload_state
                set_upload_state=set_upload_state
            />

            // Download link + report (appears after a successful cleaning)
            <ResultSection upload_state=upload_state/>
        </div>

        <Footer/>
    }
}
