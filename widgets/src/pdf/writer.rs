//! Minimal PDF 1.4 serializer for a page-sliced JPEG.
//!
//! Object layout is fixed: catalog, page tree, Helvetica font, the shared
//! image XObject, then a page object and its content stream per page. Offsets
//! are recorded as objects are written and emitted in the xref table.

use super::layout::{
    DATE_BASELINE_MM, FOOTER_BASELINE_MM, PagePlan, PageSlice, TEXT_MARGIN_MM, TITLE_BASELINE_MM,
};
use super::{FOOTER_TEXT, JpegImage};

const PT_PER_MM: f64 = 72.0 / 25.4;

const TITLE_FONT_PT: u32 = 20;
const DATE_FONT_PT: u32 = 10;
const FOOTER_FONT_PT: u32 = 8;

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FONT_ID: usize = 3;
const IMAGE_ID: usize = 4;
const FIRST_PAGE_ID: usize = 5;

/// Heading printed on the first page of a titled export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitleBlock<'a> {
    pub title: &'a str,
    pub generated_on: &'a str,
}

/// Serialize `plan` with `image` drawn on every page.
pub fn render_pdf(plan: &PagePlan, image: &JpegImage, title: Option<&TitleBlock<'_>>) -> Vec<u8> {
    let mut out = PdfBuffer::new();
    let page_ids: Vec<usize> = (0..plan.pages.len()).map(|i| FIRST_PAGE_ID + i * 2).collect();
    let page_w = mm_to_pt(plan.geometry.width_mm);
    let page_h = mm_to_pt(plan.geometry.height_mm);

    out.object(CATALOG_ID, &format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>"));

    let kids = page_ids
        .iter()
        .map(|id| format!("{id} 0 R"))
        .collect::<Vec<_>>()
        .join(" ");
    out.object(PAGES_ID, &format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", page_ids.len()));

    out.object(
        FONT_ID,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );

    out.stream(
        IMAGE_ID,
        &format!(
            "/Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceRGB \
             /BitsPerComponent 8 /Filter /DCTDecode",
            image.width_px, image.height_px
        ),
        &image.bytes,
    );

    for (slice, page_id) in plan.pages.iter().zip(&page_ids) {
        let contents_id = page_id + 1;
        out.object(
            *page_id,
            &format!(
                "<< /Type /Page /Parent {PAGES_ID} 0 R /MediaBox [0 0 {page_w:.2} {page_h:.2}] \
                 /Resources << /Font << /F1 {FONT_ID} 0 R >> /XObject << /Im0 {IMAGE_ID} 0 R >> >> \
                 /Contents {contents_id} 0 R >>"
            ),
        );
        let content = page_content(plan, slice, title);
        out.stream(contents_id, "", content.as_bytes());
    }

    out.finish(CATALOG_ID)
}

fn page_content(plan: &PagePlan, slice: &PageSlice, title: Option<&TitleBlock<'_>>) -> String {
    let page_h_mm = plan.geometry.height_mm;
    let img_w = mm_to_pt(plan.image_width_mm);
    let img_h = mm_to_pt(plan.image_height_mm);
    let img_y = mm_to_pt(page_h_mm - slice.image_top_mm - plan.image_height_mm);

    let mut content = format!("q\n{img_w:.2} 0 0 {img_h:.2} 0 {img_y:.2} cm\n/Im0 Do\nQ\n");

    if let Some(block) = title {
        if slice.title_block {
            content.push_str(&text_op(TITLE_FONT_PT, TITLE_BASELINE_MM, page_h_mm, block.title));
            let dated = format!("Generated on {}", block.generated_on);
            content.push_str(&text_op(DATE_FONT_PT, DATE_BASELINE_MM, page_h_mm, &dated));
        }
        if slice.footer {
            content.push_str(&text_op(FOOTER_FONT_PT, FOOTER_BASELINE_MM, page_h_mm, FOOTER_TEXT));
        }
    }
    content
}

fn text_op(size_pt: u32, baseline_mm: f64, page_h_mm: f64, text: &str) -> String {
    let x = mm_to_pt(TEXT_MARGIN_MM);
    let y = mm_to_pt(page_h_mm - baseline_mm);
    format!("BT\n/F1 {size_pt} Tf\n{x:.2} {y:.2} Td\n({}) Tj\nET\n", escape_text(text))
}

fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

/// Encode to WinAnsi and escape for a PDF literal string.
///
/// Characters Helvetica's WinAnsi encoding cannot express become `?`.
pub(super) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            '\t' | '\n' | '\r' => out.push(' '),
            _ => match winansi_byte(ch) {
                Some(byte) => out.push_str(&format!("\\{byte:03o}")),
                None => out.push('?'),
            },
        }
    }
    out
}

fn winansi_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        '\u{A0}'..='\u{FF}' => {
            let Ok(latin1) = u8::try_from(ch) else {
                return None;
            };
            latin1
        }
        _ => return None,
    };
    Some(byte)
}

// =============================================================================
// BUFFER
// =============================================================================

struct PdfBuffer {
    bytes: Vec<u8>,
    /// Byte offset of object `n` at index `n - 1`.
    offsets: Vec<usize>,
}

impl PdfBuffer {
    fn new() -> Self {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self { bytes, offsets: Vec::new() }
    }

    fn begin(&mut self, id: usize) {
        debug_assert_eq!(id, self.offsets.len() + 1, "objects must be written in id order");
        self.offsets.push(self.bytes.len());
        self.push(&format!("{id} 0 obj\n"));
    }

    fn object(&mut self, id: usize, body: &str) {
        self.begin(id);
        self.push(body);
        self.push("\nendobj\n");
    }

    fn stream(&mut self, id: usize, dict_entries: &str, data: &[u8]) {
        self.begin(id);
        let sep = if dict_entries.is_empty() { "" } else { " " };
        self.push(&format!("<< {dict_entries}{sep}/Length {} >>\nstream\n", data.len()));
        self.bytes.extend_from_slice(data);
        self.push("\nendstream\nendobj\n");
    }

    fn push(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    fn finish(mut self, root_id: usize) -> Vec<u8> {
        let xref_offset = self.bytes.len();
        let size = self.offsets.len() + 1;
        self.push(&format!("xref\n0 {size}\n0000000000 65535 f \n"));
        let entries: String = self
            .offsets
            .iter()
            .map(|offset| format!("{offset:010} 00000 n \n"))
            .collect();
        self.push(&entries);
        self.push(&format!(
            "trailer\n<< /Size {size} /Root {root_id} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
        ));
        self.bytes
    }
}
