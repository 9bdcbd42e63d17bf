//! Contact form with inline validation and per-form rate limiting.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::util::forms::{CONTACT_KEY, ContactSubmission, admit};

#[component]
pub fn ContactForm() -> impl IntoView {
    let limit = expect_context::<SiteConfig>().contact_limit;
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = ContactSubmission::validate(&name.get(), &email.get(), &message.get())
            .and_then(|submission| {
                admit(widgets::rate_limit::global(), CONTACT_KEY, limit)?;
                Ok(submission)
            });
        match result {
            Ok(submission) => {
                leptos::logging::log!("contact request from {}", submission.email);
                sent.set(true);
                info.set(format!("Thanks {}, we'll be in touch shortly.", submission.name));
                message.set(String::new());
            }
            Err(e) => {
                sent.set(false);
                info.set(e.to_string());
            }
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate=true>
            <label class="contact-form__field">
                "Name"
                <input
                    type="text"
                    autocomplete="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__field">
                "Email"
                <input
                    type="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__field">
                "Message"
                <textarea
                    rows="5"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="button" type="submit">"Send message"</button>
            <Show when=move || !info.get().is_empty()>
                <p
                    class=move || if sent.get() { "form-message" } else { "form-message form-message--error" }
                    role="status"
                >
                    {move || info.get()}
                </p>
            </Show>
        </form>
    }
}
