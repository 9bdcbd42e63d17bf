//! Button that exports a page section to PDF.

use leptos::prelude::*;
use widgets::pdf::ExportRequest;

use crate::util::pdf_export::export_element_to_pdf;

#[cfg(feature = "csr")]
const SAVED_NOTICE_MS: u64 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportStatus {
    Idle,
    Busy,
    Saved,
}

#[component]
pub fn ExportButton(request: ExportRequest, #[prop(default = "Export PDF")] label: &'static str) -> impl IntoView {
    let status = RwSignal::new(ExportStatus::Idle);
    let error = RwSignal::new(None::<String>);
    let request = StoredValue::new(request);

    let on_click = move |_| {
        if status.get() == ExportStatus::Busy {
            return;
        }
        status.set(ExportStatus::Busy);
        error.set(None);
        let request = request.get_value();
        leptos::task::spawn_local(async move {
            match export_element_to_pdf(request).await {
                Ok(_) => {
                    status.set(ExportStatus::Saved);
                    #[cfg(feature = "csr")]
                    gloo_timers::future::sleep(std::time::Duration::from_millis(SAVED_NOTICE_MS)).await;
                }
                Err(e) => {
                    leptos::logging::warn!("pdf export failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            status.set(ExportStatus::Idle);
        });
    };

    view! {
        <button
            class="button export-button"
            on:click=on_click
            disabled=move || status.get() == ExportStatus::Busy
        >
            {move || match status.get() {
                ExportStatus::Idle => label,
                ExportStatus::Busy => "Exporting...",
                ExportStatus::Saved => "Saved",
            }}
        </button>
        <Show when=move || error.get().is_some()>
            <p class="form-message form-message--error" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
