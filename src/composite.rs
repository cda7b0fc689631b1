//! Circular masking: clip a square raster to a circle and stroke its rim.

use tiny_skia::{
    BlendMode, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Transform,
};

use crate::border::BorderSpec;
use crate::color::Color;
use crate::error::AvatarError;
use crate::raster::new_pixmap;

/// What is being masked into the circle.
#[derive(Debug, Clone, Copy)]
pub enum CircleSource<'a> {
    /// A freshly drawn glyph buffer (background already painted). The output
    /// side is the smaller of its dimensions.
    Glyph(&'a Pixmap),
    /// The fallback raster, placed a quarter side in from the top-left over
    /// the fill color.
    Fallback {
        /// The fallback raster, drawn unscaled.
        raster: &'a Pixmap,
        /// Output side in pixels.
        side: u32,
    },
}

impl CircleSource<'_> {
    /// Side of the square output raster.
    #[must_use]
    pub fn side(&self) -> u32 {
        match self {
            CircleSource::Glyph(buffer) => buffer.width().min(buffer.height()),
            CircleSource::Fallback { side, .. } => *side,
        }
    }
}

/// Radius actually used for a circle in a `side`-wide square; `0` means auto.
///
/// Explicit radii are capped at `side`, which already covers the square.
#[must_use]
pub fn effective_radius(side: u32, radius: u32) -> f32 {
    if radius == 0 {
        side as f32 / 2.0
    } else {
        (radius as f32).min(side as f32)
    }
}

/// Mask `source` into a circle.
///
/// The circle is filled with `fill`, then the source is drawn with
/// source-in blending so only the circle's silhouette keeps it, and finally
/// `border` is stroked along the rim.
///
/// # Errors
///
/// Returns an error if a raster cannot be allocated.
pub fn circular_crop(
    source: CircleSource<'_>,
    radius: u32,
    fill: Color,
    border: &BorderSpec,
) -> Result<Pixmap, AvatarError> {
    let side = source.side();
    let mut output = new_pixmap(side, side)?;
    let r = effective_radius(side, radius);
    let center = side as f32 / 2.0;

    let mut paint = Paint::default();
    paint.set_color(fill.to_skia());
    paint.anti_alias = true;
    if let Some(circle) = PathBuilder::from_circle(center, center, r) {
        output.fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
    }

    let layer = match source {
        CircleSource::Glyph(buffer) => crop_to(buffer, side)?,
        CircleSource::Fallback { raster, .. } => fallback_layer(raster, side, fill)?,
    };

    let source_in = PixmapPaint { blend_mode: BlendMode::SourceIn, ..PixmapPaint::default() };
    output.draw_pixmap(0, 0, layer.as_ref(), &source_in, Transform::identity(), None);

    border.stroke_circle(&mut output, center, center, r);
    Ok(output)
}

/// Top-left `side × side` window of `buffer`.
fn crop_to(buffer: &Pixmap, side: u32) -> Result<Pixmap, AvatarError> {
    if buffer.width() == side && buffer.height() == side {
        return Ok(buffer.clone());
    }
    let rect = tiny_skia::IntRect::from_xywh(0, 0, side, side)
        .ok_or(AvatarError::Allocation { width: side, height: side })?;
    buffer.clone_rect(rect).ok_or(AvatarError::Allocation { width: side, height: side })
}

/// Fallback raster over the fill color, offset a quarter side in.
fn fallback_layer(raster: &Pixmap, side: u32, fill: Color) -> Result<Pixmap, AvatarError> {
    let mut layer = new_pixmap(side, side)?;
    if let Some(rect) = Rect::from_xywh(0.0, 0.0, side as f32, side as f32) {
        let mut paint = Paint::default();
        paint.set_color(fill.to_skia());
        layer.fill_rect(rect, &paint, Transform::identity(), None);
    }
    let offset = (side / 4) as i32;
    layer.draw_pixmap(
        offset,
        offset,
        raster.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 200, 0);

    fn solid(width: u32, height: u32, color: Color) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        pixmap.fill(color.to_skia());
        pixmap
    }

    fn at(pixmap: &Pixmap, x: u32, y: u32) -> Color {
        Color::from_premultiplied(pixmap.pixel(x, y).unwrap())
    }

    fn no_border() -> BorderSpec {
        BorderSpec::new(0.0, Color::BLACK)
    }

    #[test]
    fn auto_radius_is_half_side() {
        assert!((effective_radius(80, 0) - 40.0).abs() < f32::EPSILON);
        assert!((effective_radius(80, 12) - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn oversized_radius_still_fills_square() {
        assert!((effective_radius(40, u32::MAX) - 40.0).abs() < f32::EPSILON);
        let buffer = solid(40, 40, GREEN);
        let out = circular_crop(CircleSource::Glyph(&buffer), u32::MAX, RED, &no_border()).unwrap();
        assert_eq!(at(&out, 0, 0), GREEN);
        assert_eq!(at(&out, 39, 39), GREEN);
    }

    #[test]
    fn glyph_output_is_smaller_side_square() {
        let buffer = solid(120, 80, GREEN);
        let out = circular_crop(CircleSource::Glyph(&buffer), 0, RED, &no_border()).unwrap();
        assert_eq!((out.width(), out.height()), (80, 80));
    }

    #[test]
    fn source_in_keeps_source_inside_circle_only() {
        let buffer = solid(60, 60, GREEN);
        let out = circular_crop(CircleSource::Glyph(&buffer), 0, RED, &no_border()).unwrap();
        assert_eq!(at(&out, 30, 30), GREEN);
        assert_eq!(out.pixel(0, 0).unwrap().alpha(), 0);
        assert_eq!(out.pixel(59, 59).unwrap().alpha(), 0);
    }

    #[test]
    fn explicit_radius_shrinks_circle_not_output() {
        let buffer = solid(60, 60, GREEN);
        let out = circular_crop(CircleSource::Glyph(&buffer), 10, RED, &no_border()).unwrap();
        assert_eq!((out.width(), out.height()), (60, 60));
        assert_eq!(at(&out, 30, 30), GREEN);
        assert_eq!(out.pixel(30, 5).unwrap().alpha(), 0);
    }

    #[test]
    fn fallback_is_centered_over_fill() {
        let fallback = solid(20, 20, GREEN);
        let source = CircleSource::Fallback { raster: &fallback, side: 40 };
        let out = circular_crop(source, 0, RED, &no_border()).unwrap();
        assert_eq!((out.width(), out.height()), (40, 40));
        assert_eq!(at(&out, 20, 20), GREEN);
        assert_eq!(at(&out, 20, 5), RED);
        assert_eq!(out.pixel(0, 0).unwrap().alpha(), 0);
    }

    #[test]
    fn border_is_stroked_on_rim() {
        let buffer = solid(40, 40, GREEN);
        let border = BorderSpec::new(4.0, Color::BLACK);
        let out = circular_crop(CircleSource::Glyph(&buffer), 0, RED, &border).unwrap();
        assert_eq!(at(&out, 20, 0), Color::BLACK);
        assert_eq!(at(&out, 20, 20), GREEN);
    }
}
