//! Geometry for framing a rendered icon inside its target footprint.

use image::RgbaImage;

use crate::icon::{RectPx, SizePx};

/// Returns the smallest rectangle containing every pixel with non-zero alpha.
///
/// Returns `None` for a fully transparent image.
pub fn bounding_box(img: &RgbaImage) -> Option<RectPx> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    if min_x == u32::MAX {
        return None;
    }

    Some(RectPx::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Shrinks `size` to fit inside `bounds`, keeping the aspect ratio.
///
/// The limiting axis decides the scale factor. Sizes that already fit are
/// returned unchanged. Each side is rounded to the nearest pixel and kept
/// within `1..=bound`.
pub fn shrink_to_fit(size: SizePx, bounds: SizePx) -> SizePx {
    if size.width <= bounds.width && size.height <= bounds.height {
        return size;
    }

    let scale = f64::min(
        bounds.width as f64 / size.width as f64,
        bounds.height as f64 / size.height as f64,
    );

    let side = |len: u32, bound: u32| ((len as f64 * scale).round() as u32).clamp(1, bound);

    SizePx::new(side(size.width, bounds.width), side(size.height, bounds.height))
}

/// Offset that centers `inner` within `outer`, rounding toward the top-left.
pub fn center_offset(inner: SizePx, outer: SizePx) -> (u32, u32) {
    (
        outer.width.saturating_sub(inner.width) / 2,
        outer.height.saturating_sub(inner.height) / 2,
    )
}
