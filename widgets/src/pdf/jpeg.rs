//! JPEG payloads handed from the rasterizer to the PDF writer.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::ExportError;

/// Baseline or progressive JPEG bytes with their pixel size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JpegImage {
    pub bytes: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

impl JpegImage {
    /// Wrap encoded bytes, reading the size from the frame header.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ExportError> {
        let (width_px, height_px) =
            frame_size(&bytes).ok_or_else(|| ExportError::Encode("not a JPEG stream".to_owned()))?;
        Ok(Self { bytes, width_px, height_px })
    }
}

/// Decode a `data:image/jpeg;base64,...` URL into JPEG bytes.
pub fn decode_data_url(url: &str) -> Result<JpegImage, ExportError> {
    let Some((header, payload)) = url.split_once(',') else {
        return Err(ExportError::Encode("malformed data URL".to_owned()));
    };
    if !header.starts_with("data:image/jpeg") || !header.ends_with(";base64") {
        return Err(ExportError::Encode(format!("unexpected data URL header '{header}'")));
    }
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    JpegImage::from_bytes(bytes)
}

/// Scan markers up to the first start-of-frame and return `(width, height)`.
fn frame_size(bytes: &[u8]) -> Option<(u32, u32)> {
    if !bytes.starts_with(&[0xFF, 0xD8]) {
        return None;
    }
    let mut pos = 2;
    loop {
        if *bytes.get(pos)? != 0xFF {
            return None;
        }
        let marker = *bytes.get(pos + 1)?;
        // Fill bytes and standalone markers carry no length.
        if marker == 0xFF {
            pos += 1;
            continue;
        }
        if marker == 0x01 || (0xD0..=0xD7).contains(&marker) {
            pos += 2;
            continue;
        }
        let len = usize::from(u16::from_be_bytes([*bytes.get(pos + 2)?, *bytes.get(pos + 3)?]));
        let is_sof = (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);
        if is_sof {
            let height = u16::from_be_bytes([*bytes.get(pos + 5)?, *bytes.get(pos + 6)?]);
            let width = u16::from_be_bytes([*bytes.get(pos + 7)?, *bytes.get(pos + 8)?]);
            return Some((u32::from(width), u32::from(height)));
        }
        pos += 2 + len;
    }
}
