//! DOM binding for `widgets::focus::FocusTrap`.
//!
//! `use_focus_trap` activates a trap on a container as soon as the container
//! is mounted and tears it down with the owning component, so overlays only
//! need to be rendered conditionally (`<Show>`) to get trap semantics.
//!
//! TRADE-OFFS
//! ==========
//! Keys are observed on `window` rather than the container so Tab presses
//! that start outside the overlay (e.g. right after it opens) are still
//! contained.

use leptos::html::Div;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use widgets::focus::{FOCUSABLE_SELECTOR, FocusCandidate, FocusHost, FocusTrap, FocusTrapOptions, KeyAction, is_focusable};

/// `FocusHost` over the live document.
#[cfg(feature = "csr")]
pub struct DomFocusHost {
    document: web_sys::Document,
}

#[cfg(feature = "csr")]
impl DomFocusHost {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

#[cfg(feature = "csr")]
impl FocusHost for DomFocusHost {
    type Element = web_sys::HtmlElement;

    fn active_element(&self) -> Option<Self::Element> {
        self.document
            .active_element()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    }

    fn focusable_within(&self, container: &Self::Element) -> Vec<Self::Element> {
        let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .filter(|el| {
                let tag = el.tag_name().to_ascii_lowercase();
                let tabindex = el
                    .get_attribute("tabindex")
                    .and_then(|v| v.trim().parse::<i32>().ok());
                is_focusable(&FocusCandidate {
                    tag: &tag,
                    has_href: el.has_attribute("href"),
                    tabindex,
                    disabled: el.has_attribute("disabled"),
                })
            })
            .collect()
    }

    fn focus(&self, element: &Self::Element) {
        if let Err(e) = element.focus() {
            leptos::logging::warn!("focus failed: {e:?}");
        }
    }

    fn is_attached(&self, element: &Self::Element) -> bool {
        element.is_connected()
    }
}

/// Trap focus inside `container` while it is mounted.
///
/// Escape invokes `on_escape` when given; closing the overlay is the caller's job.
pub fn use_focus_trap(container: NodeRef<Div>, on_escape: Option<Callback<()>>) {
    #[cfg(feature = "csr")]
    {
        let Some(host) = DomFocusHost::new() else {
            return;
        };
        let trap = StoredValue::new_local(FocusTrap::new(host));

        Effect::new(move |_| {
            let Some(div) = container.get() else {
                return;
            };
            let element: web_sys::HtmlElement = div.into();
            let mut options = FocusTrapOptions::modal();
            if let Some(cb) = on_escape {
                options = options.on_escape(move || cb.run(()));
            }
            trap.update_value(|t| t.activate(element, options));
        });

        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let action = trap
                .try_with_value(|t| t.handle_key(&ev.key(), ev.shift_key()))
                .unwrap_or(KeyAction::PassThrough);
            if action != KeyAction::PassThrough {
                ev.prevent_default();
            }
        });

        on_cleanup(move || {
            handle.remove();
            trap.try_update_value(FocusTrap::deactivate);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (container, on_escape);
    }
}
