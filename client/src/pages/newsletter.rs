//! Newsletter issue with PDF export.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::export_button::ExportButton;
use crate::config::SiteConfig;
use crate::util::markdown::render_markdown_html;

const ISSUE_MARKDOWN: &str = include_str!("../../content/newsletter.md");

#[component]
pub fn NewsletterPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let request = config.export.request();
    let body = render_markdown_html(ISSUE_MARKDOWN);

    view! {
        <Title text="Sensor Insights Newsletter"/>
        <Meta name="description" content="Quarterly field notes on calibration, deployments and product updates."/>
        <article id=config.export.element_id.clone() class="newsletter">
            <header class="newsletter__header">
                <h1>"Sensor Insights"</h1>
                <div class="newsletter-actions">
                    <ExportButton request=request/>
                </div>
            </header>
            <div class="newsletter__body" inner_html=body></div>
            <p class="newsletter__share no-print">"Forward this issue to a colleague who owns a sensor fleet."</p>
        </article>
    }
}
