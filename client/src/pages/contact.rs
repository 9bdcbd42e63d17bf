//! Contact page.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact us"/>
        <Meta name="description" content="Talk to an engineer about your sensor deployment."/>
        <section class="contact">
            <h1>"Talk to an engineer"</h1>
            <p>"Tell us about your site and we'll reply within one business day."</p>
            <ContactForm/>
        </section>
    }
}
