//! Raster allocation and conversion between `tiny-skia` and `image` buffers.

use image::RgbaImage;
use tiny_skia::{ColorU8, IntSize, Pixmap};

use crate::error::AvatarError;

/// Allocate a fully transparent raster.
///
/// # Errors
///
/// Returns [`AvatarError::Allocation`] for zero or oversized dimensions.
pub fn new_pixmap(width: u32, height: u32) -> Result<Pixmap, AvatarError> {
    Pixmap::new(width, height).ok_or(AvatarError::Allocation { width, height })
}

/// Convert a straight-alpha `image` buffer into a premultiplied raster.
///
/// # Errors
///
/// Returns [`AvatarError::Allocation`] if the image has a zero dimension.
pub fn from_rgba_image(img: &RgbaImage) -> Result<Pixmap, AvatarError> {
    let (width, height) = img.dimensions();
    let size = IntSize::from_wh(width, height).ok_or(AvatarError::Allocation { width, height })?;
    let mut data = Vec::with_capacity(img.as_raw().len());
    for px in img.pixels() {
        let [r, g, b, a] = px.0;
        let p = ColorU8::from_rgba(r, g, b, a).premultiply();
        data.extend_from_slice(&[p.red(), p.green(), p.blue(), p.alpha()]);
    }
    Pixmap::from_vec(data, size).ok_or(AvatarError::Allocation { width, height })
}

/// Convert a premultiplied raster into a straight-alpha `image` buffer.
#[must_use]
pub fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for p in pixmap.pixels() {
        let c = p.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .unwrap_or_else(|| RgbaImage::new(pixmap.width(), pixmap.height()))
}
