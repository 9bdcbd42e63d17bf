//! Scroll completion percentage for the reading-progress indicator.
//!
//! Metrics are sampled by the host on mount and on every scroll event; nothing
//! here is stored between samples. Easing the indicator is left to CSS.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// One sample of the document's vertical scroll geometry, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub viewport_height: f64,
    pub document_height: f64,
    pub scroll_top: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(viewport_height: f64, document_height: f64, scroll_top: f64) -> Self {
        Self { viewport_height, document_height, scroll_top }
    }

    /// Distance the document can actually scroll.
    #[must_use]
    pub fn scrollable_height(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Completion in `0.0..=100.0`.
    ///
    /// A document that fits in the viewport reports 0 rather than dividing by
    /// zero; non-finite samples do the same.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        let scrollable = self.scrollable_height();
        if !scrollable.is_finite() || scrollable <= 0.0 {
            return 0.0;
        }
        let pct = (self.scroll_top / scrollable) * 100.0;
        if pct.is_nan() {
            return 0.0;
        }
        pct.clamp(0.0, 100.0)
    }
}

/// Whether the indicator renders on the current page.
///
/// Evaluated once against the path at mount. Navigating within the same mount
/// does not re-evaluate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressVisibility {
    visible: bool,
}

impl ProgressVisibility {
    /// Visible when `path` contains any entry of `allow_list`, or when the list is empty.
    #[must_use]
    pub fn for_path<S: AsRef<str>>(path: &str, allow_list: &[S]) -> Self {
        let visible = allow_list.is_empty() || allow_list.iter().any(|entry| path.contains(entry.as_ref()));
        Self { visible }
    }

    #[must_use]
    pub fn always() -> Self {
        Self { visible: true }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }
}

/// CSS width value for a percentage, e.g. `"42.5%"`.
#[must_use]
pub fn width_style(percentage: f64) -> String {
    format!("{:.1}%", percentage.clamp(0.0, 100.0))
}
