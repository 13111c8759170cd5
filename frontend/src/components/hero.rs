//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Clean your data in one click"</h1>
            <p class="subtitle">
                "Upload a messy CSV or Excel file and get back a cleaned copy: "
                "fuzzy duplicates merged, null rows dropped, outliers removed. "
                "Cleaned files are deleted from the server after a few minutes."
            </p>
        </div>
    }
}
