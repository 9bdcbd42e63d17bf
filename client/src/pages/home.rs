//! Landing page with a demo-request dialog.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::components::contact_form::ContactForm;
use crate::components::dialog::Dialog;
use crate::config::SiteConfig;
use crate::state::ui::UiState;

#[derive(Clone, Copy)]
struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature { title: "Edge thresholds", body: "Alerts evaluate on the gateway, so a dropped uplink never hides a breach." },
    Feature { title: "Drift tracking", body: "Every probe reports its calibration age alongside its readings." },
    Feature { title: "Open exports", body: "CSV, Parquet and webhook delivery without a per-seat license." },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let close_dialog = Callback::new(move |()| ui.update(|u| u.demo_dialog_open = false));

    view! {
        <Title text=format!("{} | Industrial sensing that stays calibrated", config.company_name)/>
        <Meta
            name="description"
            content="Wireless industrial sensors with edge alerting and calibration tracking."
        />
        <section class="hero">
            <h1>"Industrial sensing that stays calibrated"</h1>
            <p class="hero__lead">
                "Thermal, strain and humidity probes that tell you when they drift, before your data does."
            </p>
            <div class="hero__actions">
                <button class="button" on:click=move |_| ui.update(|u| u.demo_dialog_open = true)>
                    "Request a demo"
                </button>
                <A href="/newsletter" attr:class="button button--ghost">"Read the newsletter"</A>
            </div>
        </section>
        <section class="features">
            {FEATURES
                .iter()
                .map(|f| {
                    view! {
                        <article class="feature">
                            <h3>{f.title}</h3>
                            <p>{f.body}</p>
                        </article>
                    }
                })
                .collect_view()}
        </section>
        <Show when=move || ui.get().demo_dialog_open>
            <Dialog title="Request a demo" on_close=close_dialog>
                <ContactForm/>
            </Dialog>
        </Show>
    }
}
