//! Modal dialog with focus containment.

use leptos::html::Div;
use leptos::prelude::*;

use crate::util::focus_trap::use_focus_trap;

/// Backdrop plus panel. Render it conditionally; it traps focus while mounted.
#[component]
pub fn Dialog(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let panel = NodeRef::<Div>::new();
    use_focus_trap(panel, Some(on_close));

    view! {
        <div class="dialog__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                aria-label=title
                node_ref=panel
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </div>
                <div class="dialog__body">{children()}</div>
            </div>
        </div>
    }
}
