//! Page footer with the newsletter signup.

use leptos::prelude::*;

use crate::components::newsletter_form::NewsletterForm;
use crate::config::SiteConfig;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <footer class="site-footer no-print">
            <div class="site-footer__signup">
                <h3>"Get the Sensor Insights newsletter"</h3>
                <NewsletterForm/>
            </div>
            <p class="site-footer__legal">{format!("© {}", config.company_name)}</p>
        </footer>
    }
}
