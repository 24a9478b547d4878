//! SVG rendering utilities using resvg/usvg.
//!
//! The working render keeps tiny-skia's premultiplied pixels so that the
//! later resize step filters colour and alpha together. Call
//! [`unpremultiply_image`] once the geometry is final.

use image::RgbaImage;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::RenderError;

/// Default edge length of the square working render.
pub const DEFAULT_RENDER_SIZE: u32 = 512;

/// Largest accepted working render edge (a 64 MiB pixmap).
pub const MAX_RENDER_SIZE: u32 = 4096;

/// Renders SVG bytes onto a `size x size` canvas.
///
/// The drawing is scaled uniformly so its larger side spans the canvas and
/// centered along the other axis. The returned image holds premultiplied
/// RGBA pixels.
pub fn render_svg(svg_data: &[u8], size: u32) -> Result<RgbaImage, RenderError> {
    let opts = Options::default();
    let tree = Tree::from_data(svg_data, &opts)?;

    let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::Pixmap(size))?;

    // Calculate scale to fit within size x size
    let svg_size = tree.size();
    let scale = (size as f32) / svg_size.width().max(svg_size.height());
    let dx = (size as f32 - svg_size.width() * scale) / 2.0;
    let dy = (size as f32 - svg_size.height() * scale) / 2.0;

    let transform = Transform::from_scale(scale, scale).post_translate(dx, dy);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap_to_rgba_image(pixmap)
}

/// Moves a tiny_skia Pixmap into an image::RgbaImage without converting pixels.
fn pixmap_to_rgba_image(pixmap: Pixmap) -> Result<RgbaImage, RenderError> {
    let width = pixmap.width();
    RgbaImage::from_raw(width, pixmap.height(), pixmap.take()).ok_or(RenderError::Pixmap(width))
}

/// Converts a premultiplied image to straight alpha in place.
pub fn unpremultiply_image(img: &mut RgbaImage) {
    for pixel in img.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let (r, g, b, a) = unpremultiply(r, g, b, a);
        pixel.0 = [r, g, b, a];
    }
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}
