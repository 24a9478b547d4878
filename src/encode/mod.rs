//! Serialization of raster buffers into LVGL image sources.
//!
//! LVGL's `LV_COLOR_FORMAT_ARGB8888` on little-endian targets expects each
//! pixel as the bytes B, G, R, A. [`EncodedIcon::from_raster`] performs that
//! reordering; the rest of the module only formats text.

pub mod template;

pub use template::{LvglVersion, SourceTemplate, format_bytes, render_header};

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::EncodeError;
use crate::icon::RasterBuffer;

/// Bytes per ARGB8888 pixel.
pub const BYTES_PER_PIXEL: u32 = 4;

// ============================================================================
// Identifiers
// ============================================================================

/// Derives a C identifier from a destination file name.
///
/// The extension is dropped and `prefix` is prepended. In both parts
/// anything outside `[A-Za-z0-9_]` becomes `_` and letters are lowercased.
/// A leading digit gets an extra `_` so the identifier stays valid C.
///
/// ```
/// use lvgl_icon_renderer::encode::derive_identifier;
///
/// assert_eq!(derive_identifier("clear-day.svg", "weather_"), "weather_clear_day");
/// assert_eq!(derive_identifier("weather_NA.svg", ""), "weather_na");
/// assert_eq!(derive_identifier("a.svg", "my-set "), "my_set_a");
/// ```
pub fn derive_identifier(destination: &str, prefix: &str) -> String {
    let stem = Path::new(destination)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(destination);

    let identifier: String = prefix
        .chars()
        .chain(stem.chars())
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();

    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{identifier}")
    } else {
        identifier
    }
}

// ============================================================================
// EncodedIcon
// ============================================================================

/// A raster buffer re-encoded in the byte order LVGL reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedIcon {
    pub identifier: String,
    pub width: u32,
    pub height: u32,
    /// Bytes per row, always `width * 4`.
    pub stride: u32,
    /// Pixels as B, G, R, A bytes, row-major.
    pub bytes: Vec<u8>,
}

impl EncodedIcon {
    /// Reorders the buffer's RGBA pixels into BGRA bytes.
    pub fn from_raster(identifier: impl Into<String>, raster: &RasterBuffer) -> Self {
        let bytes = raster
            .as_rgba_bytes()
            .chunks_exact(4)
            .flat_map(|px| [px[2], px[1], px[0], px[3]])
            .collect();

        Self {
            identifier: identifier.into(),
            width: raster.width(),
            height: raster.height(),
            stride: raster.width() * BYTES_PER_PIXEL,
            bytes,
        }
    }

    /// Total size of the pixel data in bytes.
    pub fn data_size(&self) -> usize {
        self.bytes.len()
    }

    /// Renders the `.c` source with byte array and descriptor.
    pub fn to_c_source(&self, source_name: &str, version: LvglVersion) -> String {
        let bytes_text = format_bytes(&self.bytes);
        SourceTemplate {
            identifier: &self.identifier,
            source_name,
            width: self.width,
            height: self.height,
            stride: self.stride,
            data_size: self.data_size(),
            bytes_text: &bytes_text,
            version,
        }
        .render()
    }
}

// ============================================================================
// PixelEncoder
// ============================================================================

/// Output of encoding a single icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedOutput {
    pub icon: EncodedIcon,
    /// Complete `.c` file contents.
    pub c_source: String,
    /// PNG of the exact raster buffer, for visual checks.
    pub preview_png: Vec<u8>,
}

/// Turns raster buffers into C sources and previews.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelEncoder {
    prefix: String,
    version: LvglVersion,
}

impl PixelEncoder {
    pub fn new(prefix: impl Into<String>, version: LvglVersion) -> Self {
        Self {
            prefix: prefix.into(),
            version,
        }
    }

    /// Identifier the icon stored under `destination` will get.
    pub fn identifier_for(&self, destination: &str) -> String {
        derive_identifier(destination, &self.prefix)
    }

    /// Encodes one buffer. `destination` names the identifier and the
    /// provenance comment.
    pub fn encode(&self, destination: &str, raster: &RasterBuffer) -> Result<EncodedOutput, EncodeError> {
        let icon = EncodedIcon::from_raster(self.identifier_for(destination), raster);
        let c_source = icon.to_c_source(destination, self.version);
        let preview_png = encode_png(raster)?;

        Ok(EncodedOutput {
            icon,
            c_source,
            preview_png,
        })
    }
}

/// Encodes a raster buffer as PNG bytes.
pub fn encode_png(raster: &RasterBuffer) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Cursor::new(Vec::new());
    raster.image().write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::SizePx;
    use image::{Rgba, RgbaImage};

    fn single_pixel(color: [u8; 4]) -> RasterBuffer {
        RasterBuffer::from_image(RgbaImage::from_pixel(1, 1, Rgba(color)))
    }

    #[test]
    fn identifier_sanitizing() {
        assert_eq!(derive_identifier("weather_01d.svg", ""), "weather_01d");
        assert_eq!(derive_identifier("wind-speed icon.svg", ""), "wind_speed_icon");
        assert_eq!(derive_identifier("Feels.Like.svg", "w_"), "w_feels_like");
        assert_eq!(derive_identifier("no_extension", ""), "no_extension");
    }

    #[test]
    fn identifier_prefix_is_sanitized() {
        assert_eq!(derive_identifier("a.svg", "my-set "), "my_set_a");
        assert_eq!(derive_identifier("sun.svg", "Icons.v2_"), "icons_v2_sun");
        assert_eq!(derive_identifier("sun.svg", "7seg_"), "_7seg_sun");
    }

    #[test]
    fn identifier_never_starts_with_digit() {
        assert_eq!(derive_identifier("01d.svg", ""), "_01d");
        assert_eq!(derive_identifier("01d.svg", "weather_"), "weather_01d");
    }

    #[test]
    fn red_pixel_is_emitted_as_bgra() {
        let encoded = EncodedIcon::from_raster("red", &single_pixel([255, 0, 0, 255]));
        assert_eq!(encoded.bytes, vec![0x00, 0x00, 0xff, 0xff]);
    }

    #[test]
    fn channel_order_for_mixed_pixel() {
        let encoded = EncodedIcon::from_raster("mixed", &single_pixel([0x11, 0x22, 0x33, 0x44]));
        assert_eq!(encoded.bytes, vec![0x33, 0x22, 0x11, 0x44]);
    }

    #[test]
    fn sizes_follow_dimensions() {
        let raster = RasterBuffer::transparent(SizePx::new(7, 3));
        let encoded = EncodedIcon::from_raster("t", &raster);

        assert_eq!(encoded.stride, 7 * 4);
        assert_eq!(encoded.data_size(), 7 * 3 * 4);
        // Transparent pixels are kept, not elided.
        assert!(encoded.bytes.iter().all(|b| *b == 0));
    }

    #[test]
    fn row_major_order_is_preserved() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(1, 0, Rgba([1, 0, 0, 255]));
        img.put_pixel(0, 1, Rgba([2, 0, 0, 255]));
        let encoded = EncodedIcon::from_raster("order", &RasterBuffer::from_image(img));

        // Red lands at byte 2 of each BGRA group.
        assert_eq!(encoded.bytes[4 + 2], 1);
        assert_eq!(encoded.bytes[8 + 2], 2);
    }

    #[test]
    fn encoder_produces_source_and_preview() {
        let encoder = PixelEncoder::new("weather_", LvglVersion::V9);
        let output = encoder
            .encode("clear-day.svg", &single_pixel([255, 0, 0, 255]))
            .unwrap();

        assert_eq!(output.icon.identifier, "weather_clear_day");
        assert!(output.c_source.contains("const lv_image_dsc_t weather_clear_day = {"));
        assert!(output.c_source.contains("    0x00, 0x00, 0xff, 0xff,\n"));
        assert!(output.c_source.contains(".data_size = 4,"));
        assert!(output.c_source.contains("Source: clear-day.svg"));

        let preview = image::load_from_memory(&output.preview_png).unwrap().to_rgba8();
        assert_eq!(preview.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }
}
