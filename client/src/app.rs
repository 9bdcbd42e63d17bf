//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::{scroll_progress::ScrollProgressBar, site_footer::SiteFooter, site_header::SiteHeader};
use crate::config;
use crate::pages::{
    contact::ContactPage, home::HomePage, newsletter::NewsletterPage, not_found::NotFoundPage,
};
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the site config and UI state, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = config::load();
    let ui = RwSignal::new(UiState::default());
    provide_context(site);
    provide_context(ui);

    view! {
        <Title text="Lumera Sensing"/>

        <Router>
            <RouteChrome/>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("newsletter") view=NewsletterPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}

/// Per-route chrome: remounts the progress bar and closes overlays on navigation.
#[component]
fn RouteChrome() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    Effect::new(move |_| {
        location.pathname.track();
        ui.update(UiState::close_overlays);
    });

    move || {
        let path = location.pathname.get();
        view! { <ScrollProgressBar path=path/> }
    }
}
