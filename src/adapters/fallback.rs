//! Fallback images shown when a label does not start with a letter or digit.

use std::path::Path;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::color::Color;
use crate::error::AvatarError;
use crate::raster::{from_rgba_image, new_pixmap};

/// Fill color of the built-in silhouette.
pub const SILHOUETTE: Color = Color::from_rgb_u32(0xECEFF1);

/// Draw the built-in fallback: a head-and-shoulders silhouette on a
/// transparent square of half `side`, so a quarter-side offset centers it.
///
/// # Errors
///
/// Returns an error if the raster cannot be allocated.
pub fn default_fallback(side: u32) -> Result<Pixmap, AvatarError> {
    let size = (side / 2).max(1);
    let mut pixmap = new_pixmap(size, size)?;
    let s = size as f32;

    let mut paint = Paint::default();
    paint.set_color(SILHOUETTE.to_skia());
    paint.anti_alias = true;

    let mut pb = PathBuilder::new();
    // Head
    pb.push_circle(s * 0.5, s * 0.36, s * 0.2);
    // Shoulders, cut off by the bottom edge
    pb.push_circle(s * 0.5, s * 1.05, s * 0.42);
    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
    Ok(pixmap)
}

/// Decode an image file (PNG, JPEG, WebP...) into a fallback raster.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_fallback(path: &Path) -> Result<Pixmap, AvatarError> {
    let img = image::open(path).map_err(|e| {
        AvatarError::ImageConversion(format!("Failed to decode fallback {}: {e}", path.display()))
    })?;
    from_rgba_image(&img.to_rgba8())
}
