//! CSV upload component.
//!
//! Handles file selection, upload to the backend, and rendering of the
//! returned summary and plot.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::{resolve_image_url, upload_csv};
use crate::types::UploadResult;
use crate::workflow::UploadWorkflow;
use crate::{ACCEPTED_EXTENSION, BACKEND_URL};

/// Upload section: file picker, submit trigger, and result display.
///
/// The whole lifecycle lives in one [`UploadWorkflow`] signal, updated
/// atomically per transition. The backend origin is injected as a prop
/// so the same component serves any deployment.
#[component]
pub fn UploadSection(
    /// Origin the upload is POSTed to and plot paths are resolved against.
    #[prop(into, default = String::from(BACKEND_URL))]
    backend_url: String,
) -> impl IntoView {
    let (workflow, set_workflow) = create_signal(UploadWorkflow::<File>::new());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        set_workflow.update(|w| w.select_file(file));
    };

    let on_upload = move |_| {
        // No ticket: either a request is in flight or no file is held.
        // The workflow has already recorded the local failure if any.
        let Some((attempt, file)) = set_workflow.try_update(|w| w.begin_submit()).flatten()
        else {
            return;
        };

        let backend_url = backend_url.clone();
        spawn_local(async move {
            log::info!("📤 Uploading {} to {}", file.name(), backend_url);

            let outcome = upload_csv(file, &backend_url).await;

            // try_update: if the component was torn down mid-flight the
            // signal is disposed and the response is dropped unseen.
            match outcome {
                Ok(response) => {
                    log::info!("✅ Analysis received");
                    let result = UploadResult {
                        image_url: resolve_image_url(&backend_url, &response.image),
                        summary_text: response.summary,
                    };
                    set_workflow.try_update(|w| w.apply_success(attempt, result));
                }
                Err(e) => {
                    log::error!("❌ Upload failed: {}", e);
                    set_workflow.try_update(|w| w.apply_failure(attempt, &e));
                }
            }
        });
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">"Upload your CSV file"</div>

            <input
                type="file"
                id="fileInput"
                accept=ACCEPTED_EXTENSION
                on:change=on_file_change
            />

            <button
                class="upload-button"
                on:click=on_upload
                disabled=move || workflow.with(|w| w.is_uploading())
            >
                {move || if workflow.with(|w| w.is_uploading()) {
                    "Uploading..."
                } else {
                    "Upload & Analyze"
                }}
            </button>

            <Show
                when=move || workflow.with(|w| w.is_uploading())
                fallback=|| view! { }
            >
                <div class="upload-hint">"Processing data..."</div>
            </Show>

            <Show
                when=move || workflow.with(|w| w.error_message().is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || workflow.with(|w| w.error_message().unwrap_or_default().to_string())}
                </div>
            </Show>
        </div>

        <Show
            when=move || workflow.with(|w| w.summary().is_some())
            fallback=|| view! { }
        >
            <div class="result-section">
                <h3>"Data Summary:"</h3>
                <pre class="summary-text">
                    {move || workflow.with(|w| w.summary().unwrap_or_default().to_string())}
                </pre>
            </div>
        </Show>

        <Show
            when=move || workflow.with(|w| w.image_url().is_some())
            fallback=|| view! { }
        >
            <div class="result-section">
                <h3>"Data Visualization:"</h3>
                <img
                    class="plot-image"
                    src=move || workflow.with(|w| w.image_url().unwrap_or_default().to_string())
                    alt="CSV Plot"
                />
            </div>
        </Show>
    }
}
