//! Samples the window's scroll geometry for the progress indicator.

use widgets::scroll::ScrollMetrics;

/// Current viewport height, document height and scroll offset.
///
/// Outside the browser this is an all-zero sample, which reports 0%.
pub fn sample() -> ScrollMetrics {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        let scroll_top = window.scroll_y().unwrap_or(0.0);
        ScrollMetrics::new(viewport_height, document_height, scroll_top)
    }
    #[cfg(not(feature = "csr"))]
    {
        ScrollMetrics::default()
    }
}
