//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Upload a CSV file to get a textual summary of its contents "
                "and an automatically generated chart."
            </p>
        </div>
    }
}
