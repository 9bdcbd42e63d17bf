//! Page planning: how one tall capture is sliced across fixed-size pages.
//!
//! The image is scaled to the full page width and drawn once per page, shifted
//! up by one page height each time; the page box clips what falls outside.
//! A titled export reserves a block at the top of the first page only.

use super::ExportError;

/// Vertical space reserved on page one for the title and date lines.
pub const TITLE_BLOCK_MM: f64 = 30.0;
pub const TITLE_BASELINE_MM: f64 = 15.0;
pub const DATE_BASELINE_MM: f64 = 22.0;
pub const FOOTER_BASELINE_MM: f64 = 290.0;
pub const TEXT_MARGIN_MM: f64 = 15.0;

/// Slack for float error so an exact fit does not spill onto a blank page.
const PAGE_FIT_EPSILON_MM: f64 = 1e-6;

/// Page size in millimetres. Defaults to A4 width at 295mm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self { width_mm: 210.0, height_mm: 295.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSlice {
    /// Distance from the page's top edge to the image's top edge. Negative
    /// past the first page.
    pub image_top_mm: f64,
    pub title_block: bool,
    pub footer: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PagePlan {
    pub geometry: PageGeometry,
    pub image_width_mm: f64,
    pub image_height_mm: f64,
    pub pages: Vec<PageSlice>,
}

/// Lay a `width_px` x `height_px` capture out over pages of `geometry`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn plan_pages(
    width_px: u32,
    height_px: u32,
    titled: bool,
    geometry: PageGeometry,
) -> Result<PagePlan, ExportError> {
    if width_px == 0 || height_px == 0 {
        return Err(ExportError::EmptyCapture { width: width_px, height: height_px });
    }

    let image_width_mm = geometry.width_mm;
    let image_height_mm = f64::from(height_px) * image_width_mm / f64::from(width_px);
    let first_offset = if titled { TITLE_BLOCK_MM } else { 0.0 };

    let needed = (first_offset + image_height_mm) / geometry.height_mm;
    let page_count = ((needed - PAGE_FIT_EPSILON_MM).ceil() as usize).max(1);

    let pages = (0..page_count)
        .map(|index| PageSlice {
            image_top_mm: first_offset - (index as f64) * geometry.height_mm,
            title_block: titled && index == 0,
            footer: titled,
        })
        .collect();

    Ok(PagePlan { geometry, image_width_mm, image_height_mm, pages })
}
