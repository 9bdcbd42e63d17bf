//! Shared reactive state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each struct is wrapped in an `RwSignal` by `App` and read with
//! `expect_context`. Only presentation state lives here; page copy is static.

pub mod ui;
