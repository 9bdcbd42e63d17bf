//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and interactive widgets, reading shared
//! state (`SiteConfig`, `UiState`) from Leptos context providers.

pub mod contact_form;
pub mod dialog;
pub mod export_button;
pub mod newsletter_form;
pub mod scroll_progress;
pub mod site_footer;
pub mod site_header;
