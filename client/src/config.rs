//! Site configuration embedded at build time.
//!
//! DESIGN
//! ======
//! `site.json` is compiled into the bundle and parsed once at startup. Every
//! field has a default, so a partial or broken file degrades to the built-in
//! policy with a console warning instead of a blank page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use widgets::pdf::ExportRequest;
use widgets::rate_limit::RateLimitConfig;

const SITE_JSON: &str = include_str!("../site.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub company_name: String,
    pub contact_limit: RateLimitConfig,
    pub newsletter_limit: RateLimitConfig,
    /// Path substrings on which the reading-progress bar renders. Empty means everywhere.
    pub progress_paths: Vec<String>,
    pub export: ExportDefaults,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: "Lumera Sensing".to_owned(),
            contact_limit: RateLimitConfig::default(),
            newsletter_limit: RateLimitConfig { max_attempts: 3, ..RateLimitConfig::default() },
            progress_paths: vec!["/newsletter".to_owned()],
            export: ExportDefaults::default(),
        }
    }
}

/// Newsletter export parameters.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportDefaults {
    pub element_id: String,
    pub filename: String,
    pub title: Option<String>,
    pub exclude_selectors: Vec<String>,
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            element_id: "newsletter-content".to_owned(),
            filename: "newsletter".to_owned(),
            title: Some("Sensor Insights Newsletter".to_owned()),
            exclude_selectors: vec![".no-print".to_owned()],
        }
    }
}

impl ExportDefaults {
    pub fn request(&self) -> ExportRequest {
        ExportRequest {
            element_id: self.element_id.clone(),
            filename: self.filename.clone(),
            title: self.title.clone(),
            exclude_selectors: self.exclude_selectors.clone(),
        }
    }
}

/// Parse a site config document.
pub fn parse(raw: &str) -> Result<SiteConfig, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

/// The embedded config, or defaults if it does not parse.
pub fn load() -> SiteConfig {
    match parse(SITE_JSON) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("{e}; falling back to defaults");
            SiteConfig::default()
        }
    }
}
