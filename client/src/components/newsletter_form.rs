//! Email-only newsletter signup.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::util::forms::{NEWSLETTER_KEY, admit, validate_email};

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let limit = expect_context::<SiteConfig>().newsletter_limit;
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let subscribed = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = validate_email(&email.get()).and_then(|address| {
            admit(widgets::rate_limit::global(), NEWSLETTER_KEY, limit)?;
            Ok(address)
        });
        match result {
            Ok(address) => {
                leptos::logging::log!("newsletter signup: {address}");
                subscribed.set(true);
                info.set(format!("Subscribed {address}."));
                email.set(String::new());
            }
            Err(e) => {
                subscribed.set(false);
                info.set(e.to_string());
            }
        }
    };

    view! {
        <form class="newsletter-form" on:submit=on_submit novalidate=true>
            <input
                class="newsletter-form__input"
                type="email"
                placeholder="you@company.com"
                aria-label="Email address"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button class="button" type="submit">"Subscribe"</button>
            <Show when=move || !info.get().is_empty()>
                <p
                    class=move || if subscribed.get() { "form-message" } else { "form-message form-message--error" }
                    role="status"
                >
                    {move || info.get()}
                </p>
            </Show>
        </form>
    }
}
