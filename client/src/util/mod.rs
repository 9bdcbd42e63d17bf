//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser bindings for the `widgets` crate live here so components stay free
//! of `web_sys` plumbing. Everything DOM-bound is gated on `csr` and degrades
//! to a no-op (or an error value) in native builds.

pub mod focus_trap;
pub mod forms;
pub mod markdown;
pub mod pdf_export;
pub mod scroll_metrics;
