//! # client
//!
//! Leptos + WASM frontend for the company marketing site.
//!
//! This crate contains the routed pages, the shared page chrome, and the DOM
//! bindings for the `widgets` crate: focus trapping for dialogs and the mobile
//! menu, rate-limited forms, the reading-progress bar, and newsletter PDF export.
//! Browser-only code sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
