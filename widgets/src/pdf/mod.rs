//! Paginated PDF export of a rendered page section.
//!
//! ARCHITECTURE
//! ============
//! An export hides the excluded elements, locates the target, rasterizes it
//! into a single JPEG at its full scroll size, and restores the hidden
//! elements as soon as rasterization settles. The image is then sliced across
//! fixed A4-width pages by vertical offset and written out as PDF bytes.
//!
//! The DOM sits behind [`ExportSurface`] so the same sequence runs in the
//! browser and in native tests.
//!
//! ERROR HANDLING
//! ==============
//! A missing target is reported as [`ExportError::ElementNotFound`]. Whatever
//! the outcome, hidden elements get their original inline `display` back
//! through the [`HiddenElements`] guard.

mod hide;
mod jpeg;
mod layout;
mod writer;


pub use hide::{DisplayStyle, HiddenElements};
pub use jpeg::{JpegImage, decode_data_url};
pub use layout::{PageGeometry, PagePlan, PageSlice, plan_pages};
pub use writer::{TitleBlock, render_pdf};

pub const FOOTER_TEXT: &str = "Confidential — For Authorized Recipients Only";

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("element with id '{0}' not found")]
    ElementNotFound(String),
    #[error("invalid exclusion selector '{0}'")]
    InvalidSelector(String),
    #[error("capture produced an empty image ({width}x{height})")]
    EmptyCapture { width: u32, height: u32 },
    #[error("failed to rasterize element: {0}")]
    Rasterize(String),
    #[error("failed to encode image: {0}")]
    Encode(String),
    #[error("failed to save document: {0}")]
    Save(String),
}

// =============================================================================
// JOB
// =============================================================================

/// Caller-facing export parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportRequest {
    pub element_id: String,
    pub filename: String,
    pub title: Option<String>,
    pub exclude_selectors: Vec<String>,
}

impl ExportRequest {
    #[must_use]
    pub fn new(element_id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            filename: filename.into(),
            title: None,
            exclude_selectors: Vec::new(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn exclude(mut self, selector: impl Into<String>) -> Self {
        self.exclude_selectors.push(selector.into());
        self
    }

    /// Output name with a `.pdf` extension, appended when missing.
    #[must_use]
    pub fn pdf_filename(&self) -> String {
        let name = self.filename.trim();
        let name = if name.is_empty() { "export" } else { name };
        if name.to_ascii_lowercase().ends_with(".pdf") {
            name.to_owned()
        } else {
            format!("{name}.pdf")
        }
    }
}

/// One export run: the request plus page geometry and the date stamped under the title.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportJob {
    pub request: ExportRequest,
    pub geometry: PageGeometry,
    pub generated_on: String,
}

impl ExportJob {
    #[must_use]
    pub fn new(request: ExportRequest, generated_on: impl Into<String>) -> Self {
        Self { request, geometry: PageGeometry::default(), generated_on: generated_on.into() }
    }

    fn title_block(&self) -> Option<TitleBlock<'_>> {
        self.request
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(|title| TitleBlock { title, generated_on: &self.generated_on })
    }
}

// =============================================================================
// EXPORT
// =============================================================================

/// Document access needed by an export.
#[allow(async_fn_in_trait)]
pub trait ExportSurface {
    type Element: DisplayStyle;

    /// Elements matching `selector` anywhere in the document.
    fn select_all(&self, selector: &str) -> Result<Vec<Self::Element>, ExportError>;

    fn find_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Capture `element` at its natural scroll size.
    async fn rasterize(&self, element: &Self::Element) -> Result<JpegImage, ExportError>;

    fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), ExportError>;
}

/// Run `job` against `surface` and return the bytes that were saved.
pub async fn export<S: ExportSurface>(surface: &S, job: &ExportJob) -> Result<Vec<u8>, ExportError> {
    let request = &job.request;
    log::info!("pdf export started: element={} file={}", request.element_id, request.filename);

    let image = {
        let mut hidden = HiddenElements::new();
        for selector in &request.exclude_selectors {
            hidden.hide_all(surface.select_all(selector)?);
        }
        let target = surface
            .find_by_id(&request.element_id)
            .ok_or_else(|| ExportError::ElementNotFound(request.element_id.clone()))?;
        surface.rasterize(&target).await?
    };

    let title = job.title_block();
    let plan = plan_pages(image.width_px, image.height_px, title.is_some(), job.geometry)?;
    let bytes = render_pdf(&plan, &image, title.as_ref());

    let filename = request.pdf_filename();
    surface.save(&filename, &bytes)?;
    log::info!("pdf export saved: file={filename} pages={} bytes={}", plan.pages.len(), bytes.len());
    Ok(bytes)
}
