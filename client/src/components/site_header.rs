//! Top navigation bar with a focus-trapped mobile menu.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::SiteConfig;
use crate::state::ui::UiState;
use crate::util::focus_trap::use_focus_trap;

const NAV_LINKS: &[(&str, &str)] = &[("/", "Home"), ("/newsletter", "Newsletter"), ("/contact", "Contact")];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">{config.company_name}</A>
            <nav class="site-header__nav" aria-label="Primary">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                    .collect_view()}
            </nav>
            <button
                class="site-header__menu-button"
                aria-label="Open menu"
                aria-expanded=move || ui.get().nav_open.to_string()
                on:click=move |_| ui.update(UiState::toggle_nav)
            >
                "☰"
            </button>
            <Show when=move || ui.get().nav_open>
                <MobileNav/>
            </Show>
        </header>
    }
}

/// Full-screen menu; mounted only while open.
#[component]
fn MobileNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let panel = NodeRef::<Div>::new();
    let close = Callback::new(move |()| ui.update(|u| u.nav_open = false));
    use_focus_trap(panel, Some(close));

    view! {
        <div class="mobile-nav" node_ref=panel role="dialog" aria-modal="true" aria-label="Menu">
            <button class="mobile-nav__close" aria-label="Close menu" on:click=move |_| close.run(())>
                "✕"
            </button>
            <nav class="mobile-nav__links">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <A href=*href on:click=move |_| close.run(())>
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
