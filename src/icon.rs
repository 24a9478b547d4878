//! Icon types shared by the rasterizer, encoder and pipeline.
//!
//! This module provides the pixel geometry helpers, the per-icon
//! configuration entry ([`IconSpec`]) and the fixed-size pixel buffer
//! ([`RasterBuffer`]) that flows from the rasterizer to the encoder.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A rectangle defined in pixel coordinates.
///
/// Used for the bounding box of the visible content inside a rendered icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn size(&self) -> SizePx {
        SizePx::new(self.width, self.height)
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ============================================================================
// IconSpec
// ============================================================================

/// One icon to convert.
///
/// `source` names the file in the remote icon repository, `destination` the
/// local file name it is stored under. The generated identifier is derived
/// from `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct IconSpec {
    /// File name in the remote repository, e.g. `clear-day.svg`.
    pub source: String,

    /// Local file name, e.g. `weather_01d.svg`.
    pub destination: String,

    /// Final image width in pixels.
    pub width: u32,

    /// Final image height in pixels.
    pub height: u32,
}

impl IconSpec {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            width,
            height,
        }
    }

    /// Returns the target footprint.
    pub fn target(&self) -> SizePx {
        SizePx::new(self.width, self.height)
    }

    /// Rejects entries that can never produce an image.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(ConfigError::MissingName(self.destination.clone()));
        }
        if self.target().is_empty() {
            return Err(ConfigError::ZeroSize {
                destination: self.destination.clone(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

// ============================================================================
// RasterBuffer
// ============================================================================

/// A fixed-size RGBA pixel grid (straight alpha, row-major, origin top-left).
///
/// Fully transparent pixels are stored like any other pixel, so the buffer
/// always holds exactly `width * height` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    data: RgbaImage,
}

impl RasterBuffer {
    /// Creates a fully transparent buffer.
    pub fn transparent(size: SizePx) -> Self {
        Self {
            data: RgbaImage::new(size.width, size.height),
        }
    }

    /// Wraps an existing image.
    pub fn from_image(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Returns the pixel dimensions of the buffer.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    /// Returns the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.data
    }

    /// Returns the raw RGBA bytes in row-major order.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        self.data.as_raw()
    }

    /// Returns true if at least one pixel has non-zero alpha.
    pub fn has_visible_pixels(&self) -> bool {
        self.data.pixels().any(|p| p[3] != 0)
    }

    pub fn into_image(self) -> RgbaImage {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn rect_px_new() {
        let rect = RectPx::new(10, 20, 100, 200);
        assert_eq!(rect.x, 10);
        assert_eq!(rect.y, 20);
        assert_eq!(rect.size(), SizePx::new(100, 200));
    }

    #[test]
    fn size_px_is_empty() {
        assert!(SizePx::new(0, 16).is_empty());
        assert!(!SizePx::new(1, 1).is_empty());
    }

    #[test]
    fn icon_spec_rejects_zero_dimension() {
        let spec = IconSpec::new("wind.svg", "wind.svg", 0, 16);
        assert!(matches!(spec.validate(), Err(ConfigError::ZeroSize { .. })));

        let spec = IconSpec::new("wind.svg", "wind.svg", 16, 0);
        assert!(spec.validate().is_err());

        assert!(IconSpec::new("wind.svg", "wind.svg", 16, 16).validate().is_ok());
    }

    #[test]
    fn icon_spec_rejects_blank_names() {
        let spec = IconSpec::new("", "wind.svg", 16, 16);
        assert!(matches!(spec.validate(), Err(ConfigError::MissingName(_))));
    }

    #[test]
    fn transparent_buffer_keeps_every_pixel() {
        let buffer = RasterBuffer::transparent(SizePx::new(3, 2));
        assert_eq!(buffer.as_rgba_bytes().len(), 3 * 2 * 4);
        assert!(buffer.as_rgba_bytes().iter().all(|b| *b == 0));
        assert!(!buffer.has_visible_pixels());
    }

    #[test]
    fn visible_pixel_detection() {
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(2, 3, Rgba([0, 0, 0, 1]));
        let buffer = RasterBuffer::from_image(img);
        assert!(buffer.has_visible_pixels());
        assert_eq!(buffer.dimensions(), SizePx::new(4, 4));
    }
}
