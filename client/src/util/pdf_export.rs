//! Browser surface for `widgets::pdf` exports.
//!
//! RASTERIZATION
//! =============
//! The target is deep-cloned with every computed style copied inline, wrapped
//! in an SVG `foreignObject` sized to its scroll box, and loaded as an image.
//! The image is drawn onto a white canvas and encoded as JPEG. Embedded images
//! are requested anonymously; if one still taints the canvas, encoding fails
//! and the export reports a rasterize error.

#[cfg(all(test, not(feature = "csr")))]
#[path = "pdf_export_test.rs"]
mod pdf_export_test;

use widgets::pdf::{ExportError, ExportRequest};

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "csr")]
use widgets::pdf::{DisplayStyle, ExportJob, ExportSurface, JpegImage, decode_data_url};

#[cfg(feature = "csr")]
const JPEG_QUALITY: f64 = 0.95;

/// Export the element named by `request` and download it as a PDF.
///
/// Returns the bytes that were offered for download.
pub async fn export_element_to_pdf(request: ExportRequest) -> Result<Vec<u8>, ExportError> {
    #[cfg(feature = "csr")]
    {
        let surface = DomExportSurface::new()
            .ok_or_else(|| ExportError::Save("no document available".to_owned()))?;
        let job = ExportJob::new(request, today());
        widgets::pdf::export(&surface, &job).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ExportError::Save("PDF export requires a browser".to_owned()))
    }
}

#[cfg(feature = "csr")]
fn today() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("en-US", &JsValue::UNDEFINED)
        .into()
}

#[cfg(feature = "csr")]
fn js_error(context: &str, err: &JsValue) -> String {
    match err.as_string() {
        Some(message) => format!("{context}: {message}"),
        None => format!("{context}: {err:?}"),
    }
}

// =============================================================================
// ELEMENT
// =============================================================================

/// Inline `display` access on a live element.
#[cfg(feature = "csr")]
#[derive(Clone)]
pub struct DomElement(web_sys::HtmlElement);

#[cfg(feature = "csr")]
impl DisplayStyle for DomElement {
    fn display(&self) -> String {
        self.0.style().get_property_value("display").unwrap_or_default()
    }

    fn set_display(&self, value: &str) {
        let style = self.0.style();
        let result = if value.is_empty() {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", value)
        };
        if let Err(e) = result {
            leptos::logging::warn!("{}", js_error("display update failed", &e));
        }
    }
}

// =============================================================================
// SURFACE
// =============================================================================

#[cfg(feature = "csr")]
pub struct DomExportSurface {
    window: web_sys::Window,
    document: web_sys::Document,
}

#[cfg(feature = "csr")]
impl DomExportSurface {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// Deep clone of `source` with computed styles copied inline.
    fn styled_clone(&self, source: &web_sys::Element) -> Result<web_sys::Element, ExportError> {
        let clone = source
            .clone_node_with_deep(true)
            .map_err(|e| ExportError::Rasterize(js_error("clone failed", &e)))?
            .dyn_into::<web_sys::Element>()
            .map_err(|_| ExportError::Rasterize("clone is not an element".to_owned()))?;
        self.inline_styles(source, &clone);

        if let Ok(images) = clone.query_selector_all("img") {
            for img in (0..images.length()).filter_map(|i| images.item(i)) {
                if let Some(img) = img.dyn_ref::<web_sys::HtmlImageElement>() {
                    img.set_cross_origin(Some("anonymous"));
                }
            }
        }
        Ok(clone)
    }

    fn inline_styles(&self, source: &web_sys::Element, clone: &web_sys::Element) {
        if let (Ok(Some(computed)), Some(target)) = (
            self.window.get_computed_style(source),
            clone.dyn_ref::<web_sys::HtmlElement>(),
        ) {
            let style = target.style();
            for name in (0..computed.length()).map(|i| computed.item(i)) {
                if let Ok(value) = computed.get_property_value(&name) {
                    let _ = style.set_property(&name, &value);
                }
            }
        }

        let (sources, clones) = (source.children(), clone.children());
        for i in 0..sources.length().min(clones.length()) {
            if let (Some(s), Some(c)) = (sources.item(i), clones.item(i)) {
                self.inline_styles(&s, &c);
            }
        }
    }

    async fn load_image(&self, src: &str) -> Result<web_sys::HtmlImageElement, ExportError> {
        let img = web_sys::HtmlImageElement::new()
            .map_err(|e| ExportError::Rasterize(js_error("image creation failed", &e)))?;
        img.set_cross_origin(Some("anonymous"));
        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            img.set_onload(Some(resolve.unchecked_ref()));
            img.set_onerror(Some(reject.unchecked_ref()));
        });
        img.set_src(src);
        let outcome = wasm_bindgen_futures::JsFuture::from(loaded).await;
        img.set_onload(None);
        img.set_onerror(None);
        outcome.map_err(|_| ExportError::Rasterize("snapshot image failed to load".to_owned()))?;
        Ok(img)
    }

    fn draw_to_jpeg(
        &self,
        img: &web_sys::HtmlImageElement,
        width: u32,
        height: u32,
    ) -> Result<JpegImage, ExportError> {
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(|e| ExportError::Rasterize(js_error("canvas creation failed", &e)))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| ExportError::Rasterize("canvas element has the wrong type".to_owned()))?;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| ExportError::Rasterize(js_error("2d context unavailable", &e)))?
            .and_then(|ctx| ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
            .ok_or_else(|| ExportError::Rasterize("2d context unavailable".to_owned()))?;

        ctx.set_fill_style_str("#ffffff");
        ctx.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
        ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
            .map_err(|e| ExportError::Rasterize(js_error("draw failed", &e)))?;

        let url = canvas
            .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(JPEG_QUALITY))
            .map_err(|e| ExportError::Rasterize(js_error("canvas is tainted or unreadable", &e)))?;
        decode_data_url(&url)
    }
}

#[cfg(feature = "csr")]
impl ExportSurface for DomExportSurface {
    type Element = DomElement;

    fn select_all(&self, selector: &str) -> Result<Vec<DomElement>, ExportError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|_| ExportError::InvalidSelector(selector.to_owned()))?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(DomElement)
            .collect())
    }

    fn find_by_id(&self, id: &str) -> Option<DomElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map(DomElement)
    }

    async fn rasterize(&self, element: &DomElement) -> Result<JpegImage, ExportError> {
        let source = &element.0;
        let (width, height) = (source.scroll_width(), source.scroll_height());
        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(ExportError::EmptyCapture { width: 0, height: 0 });
        };
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyCapture { width, height });
        }

        let clone = self.styled_clone(source)?;
        let markup = web_sys::XmlSerializer::new()
            .and_then(|s| s.serialize_to_string(&clone))
            .map_err(|e| ExportError::Rasterize(js_error("serialization failed", &e)))?;
        let svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\
             <foreignObject x=\"0\" y=\"0\" width=\"100%\" height=\"100%\">{markup}</foreignObject></svg>"
        );
        let src = format!(
            "data:image/svg+xml;charset=utf-8,{}",
            String::from(js_sys::encode_uri_component(&svg))
        );

        let img = self.load_image(&src).await?;
        self.draw_to_jpeg(&img, width, height)
    }

    fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let save_err = |context: &str, e: &JsValue| ExportError::Save(js_error(context, e));

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/pdf");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| save_err("blob creation failed", &e))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| save_err("object URL failed", &e))?;

        let anchor = self
            .document
            .create_element("a")
            .map_err(|e| save_err("anchor creation failed", &e))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Save("anchor element has the wrong type".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        let body = self
            .document
            .body()
            .ok_or_else(|| ExportError::Save("document has no body".to_owned()))?;
        let clicked = body.append_child(&anchor).map(|_| anchor.click());
        anchor.remove();
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            leptos::logging::warn!("{}", js_error("revoking object URL failed", &e));
        }
        clicked.map_err(|e| save_err("download failed", &e))
    }
}
