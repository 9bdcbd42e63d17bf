//! Reading-progress bar pinned to the top of the viewport.

use leptos::prelude::*;
use widgets::scroll::{ProgressVisibility, width_style};

use crate::config::SiteConfig;
use crate::util::scroll_metrics;

/// Renders only on allow-listed paths; `path` is checked once at mount.
#[component]
pub fn ScrollProgressBar(#[prop(into)] path: String) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let visibility = ProgressVisibility::for_path(&path, &config.progress_paths);
    let percent = RwSignal::new(0.0_f64);

    if visibility.is_visible() {
        percent.set(scroll_metrics::sample().percentage());

        #[cfg(feature = "csr")]
        {
            let handle = window_event_listener(leptos::ev::scroll, move |_| {
                percent.set(scroll_metrics::sample().percentage());
            });
            on_cleanup(move || handle.remove());
        }
    }

    visibility.is_visible().then(|| {
        view! {
            <div
                class="scroll-progress"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || format!("{:.0}", percent.get())
            >
                <div class="scroll-progress__bar" style:width=move || width_style(percent.get())></div>
            </div>
        }
    })
}
