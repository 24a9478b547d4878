//! Rasterization of SVG sources into fixed-size, centered pixel buffers.
//!
//! # Steps
//!
//! ```text
//! SVG bytes
//!     │  render at render_size x render_size (premultiplied)
//!     ▼
//! bounding box of visible pixels ── none ──► RenderError::EmptyIcon
//!     │  crop
//!     ▼
//! shrink to fit target (Lanczos3, never upscale)
//!     │  unpremultiply
//!     ▼
//! center on transparent target-size canvas ──► RasterBuffer
//! ```

pub mod fit;
pub mod svg;

pub use fit::{bounding_box, center_offset, shrink_to_fit};
pub use svg::{DEFAULT_RENDER_SIZE, MAX_RENDER_SIZE, render_svg};

use image::imageops::{self, FilterType};

use crate::error::RenderError;
use crate::icon::{RasterBuffer, SizePx};

/// Turns SVG bytes into a [`RasterBuffer`] of an exact target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRasterizer {
    render_size: u32,
}

impl Default for IconRasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDER_SIZE)
    }
}

impl IconRasterizer {
    /// Creates a rasterizer with the given square working resolution.
    pub fn new(render_size: u32) -> Self {
        Self { render_size }
    }

    pub fn render_size(&self) -> u32 {
        self.render_size
    }

    /// Rasterizes, crops, shrinks and centers one icon.
    ///
    /// [`IconSpec::validate`](crate::IconSpec::validate) rejects empty targets
    /// before a pipeline runs; direct callers get [`RenderError::ZeroTarget`].
    pub fn rasterize(&self, svg_data: &[u8], target: SizePx) -> Result<RasterBuffer, RenderError> {
        if target.is_empty() {
            return Err(RenderError::ZeroTarget(target.width, target.height));
        }

        let working = render_svg(svg_data, self.render_size)?;
        let bbox = bounding_box(&working).ok_or(RenderError::EmptyIcon)?;

        let cropped = imageops::crop_imm(&working, bbox.x, bbox.y, bbox.width, bbox.height).to_image();

        let shrunk_size = shrink_to_fit(bbox.size(), target);
        let mut shrunk = if shrunk_size == bbox.size() {
            cropped
        } else {
            imageops::resize(&cropped, shrunk_size.width, shrunk_size.height, FilterType::Lanczos3)
        };
        svg::unpremultiply_image(&mut shrunk);

        let (x, y) = center_offset(shrunk_size, target);
        let mut canvas = RasterBuffer::transparent(target).into_image();
        imageops::replace(&mut canvas, &shrunk, x as i64, y as i64);

        log::debug!(
            "cropped {}x{} at ({}, {}), placed {}x{} at ({x}, {y}) on {}x{}",
            bbox.width,
            bbox.height,
            bbox.x,
            bbox.y,
            shrunk_size.width,
            shrunk_size.height,
            target.width,
            target.height,
        );

        Ok(RasterBuffer::from_image(canvas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect x="10" y="10" width="80" height="80" fill="#ff0000"/></svg>"##;

    const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect x="0" y="25" width="100" height="50" fill="#00ff00"/></svg>"##;

    const EMPTY_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect width="100" height="100" fill="none"/></svg>"##;

    #[test]
    fn output_matches_target_size() {
        let rasterizer = IconRasterizer::default();
        for target in [SizePx::new(60, 60), SizePx::new(16, 16), SizePx::new(48, 20)] {
            let buffer = rasterizer.rasterize(SQUARE_SVG.as_bytes(), target).unwrap();
            assert_eq!(buffer.dimensions(), target);
            assert!(buffer.has_visible_pixels());
        }
    }

    #[test]
    fn padding_is_cropped_away() {
        let buffer = IconRasterizer::default()
            .rasterize(SQUARE_SVG.as_bytes(), SizePx::new(60, 60))
            .unwrap();

        // The 10% margin of the source is gone: content reaches the corners.
        let corner = buffer.image().get_pixel(1, 1);
        assert!(corner[3] > 200, "corner alpha was {}", corner[3]);
        assert!(corner[0] > corner[1]);
    }

    #[test]
    fn wide_content_is_centered_vertically() {
        let buffer = IconRasterizer::default()
            .rasterize(WIDE_SVG.as_bytes(), SizePx::new(60, 60))
            .unwrap();
        let img = buffer.image();

        // 2:1 content shrinks to roughly 60x30, leaving ~15 rows above and below.
        assert_eq!(img.get_pixel(30, 0)[3], 0);
        assert_eq!(img.get_pixel(30, 59)[3], 0);
        assert_eq!(img.get_pixel(30, 10)[3], 0);
        assert!(img.get_pixel(30, 30)[3] > 200);
        assert!(img.get_pixel(1, 30)[3] > 0);
    }

    #[test]
    fn non_square_target_centers_horizontally() {
        let buffer = IconRasterizer::default()
            .rasterize(SQUARE_SVG.as_bytes(), SizePx::new(40, 20))
            .unwrap();
        let img = buffer.image();

        // Square content becomes 20x20 at x offset 10.
        assert_eq!(img.get_pixel(5, 10)[3], 0);
        assert_eq!(img.get_pixel(34, 10)[3], 0);
        assert!(img.get_pixel(20, 10)[3] > 200);
    }

    #[test]
    fn empty_render_is_reported() {
        let result = IconRasterizer::default().rasterize(EMPTY_SVG.as_bytes(), SizePx::new(60, 60));
        assert!(matches!(result, Err(RenderError::EmptyIcon)));
    }

    #[test]
    fn zero_target_is_rejected() {
        let result = IconRasterizer::default().rasterize(SQUARE_SVG.as_bytes(), SizePx::new(0, 60));
        assert!(matches!(result, Err(RenderError::ZeroTarget(0, 60))));
    }

    #[test]
    fn rasterizing_is_deterministic() {
        let rasterizer = IconRasterizer::default();
        let first = rasterizer.rasterize(SQUARE_SVG.as_bytes(), SizePx::new(60, 60)).unwrap();
        let second = rasterizer.rasterize(SQUARE_SVG.as_bytes(), SizePx::new(60, 60)).unwrap();
        assert_eq!(first.as_rgba_bytes(), second.as_rgba_bytes());
    }

    #[test]
    fn small_working_size_is_not_upscaled() {
        // A 32px working render of an 80% square gives a ~26px crop, smaller
        // than the target, so it is placed as-is and centered.
        let buffer = IconRasterizer::new(32)
            .rasterize(SQUARE_SVG.as_bytes(), SizePx::new(60, 60))
            .unwrap();
        let img = buffer.image();
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(59, 59)[3], 0);
        assert!(img.get_pixel(30, 30)[3] > 200);
    }
}
