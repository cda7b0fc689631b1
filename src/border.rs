//! Border descriptor: stroke color and thickness around an avatar.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::color::Color;

/// Stroke color and thickness applied around a generated avatar.
///
/// The setters keep an internal stroke brush in sync, so a border can be
/// tweaked between draws without rebuilding it. A thickness of zero is
/// never drawn.
#[derive(Debug, Clone)]
pub struct BorderSpec {
    thickness: f32,
    color: Color,
    paint: Paint<'static>,
    stroke: Stroke,
}

impl BorderSpec {
    /// Create a border. Negative or non-finite thickness is treated as zero.
    #[must_use]
    pub fn new(thickness: f32, color: Color) -> Self {
        let mut border = Self {
            thickness: 0.0,
            color,
            paint: Paint::default(),
            stroke: Stroke::default(),
        };
        border.set_thickness(thickness);
        border.sync();
        border
    }

    /// Stroke thickness in pixels.
    #[must_use]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Stroke color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// False for zero-thickness or fully transparent borders.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.thickness > 0.0 && self.color.a > 0
    }

    /// Change the stroke thickness.
    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = if thickness.is_finite() { thickness.max(0.0) } else { 0.0 };
        self.sync();
    }

    /// Change the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.sync();
    }

    fn sync(&mut self) {
        self.paint.set_color(self.color.to_skia());
        self.paint.anti_alias = true;
        self.stroke.width = self.thickness;
    }

    /// Stroke a circle centered at (`cx`, `cy`).
    pub(crate) fn stroke_circle(&self, pixmap: &mut Pixmap, cx: f32, cy: f32, radius: f32) {
        if !self.is_visible() {
            return;
        }
        if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
            pixmap.stroke_path(&path, &self.paint, &self.stroke, Transform::identity(), None);
        }
    }

    /// Stroke along the raster edge, inset so the whole stroke stays visible.
    pub(crate) fn stroke_edge(&self, pixmap: &mut Pixmap) {
        if !self.is_visible() {
            return;
        }
        let half = self.thickness / 2.0;
        let (w, h) = (pixmap.width() as f32, pixmap.height() as f32);
        // Thicker than the raster: paint all of it.
        if self.thickness * 2.0 >= w.min(h) {
            if let Some(rect) = Rect::from_xywh(0.0, 0.0, w, h) {
                let path = PathBuilder::from_rect(rect);
                pixmap.fill_path(&path, &self.paint, FillRule::Winding, Transform::identity(), None);
            }
            return;
        }
        if let Some(rect) = Rect::from_xywh(half, half, w - self.thickness, h - self.thickness) {
            let path = PathBuilder::from_rect(rect);
            pixmap.stroke_path(&path, &self.paint, &self.stroke, Transform::identity(), None);
        }
    }
}

impl PartialEq for BorderSpec {
    fn eq(&self, other: &Self) -> bool {
        self.thickness.to_bits() == other.thickness.to_bits() && self.color == other.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(pixmap: &Pixmap, x: u32, y: u32) -> Color {
        Color::from_premultiplied(pixmap.pixel(x, y).unwrap())
    }

    #[test]
    fn negative_thickness_clamps_to_zero() {
        let border = BorderSpec::new(-3.0, Color::BLACK);
        assert!(border.thickness().abs() < f32::EPSILON);
        assert!(!border.is_visible());
    }

    #[test]
    fn setters_update_stroke() {
        let mut border = BorderSpec::new(1.0, Color::BLACK);
        border.set_thickness(4.0);
        border.set_color(Color::rgb(0, 0, 255));
        assert!((border.stroke.width - 4.0).abs() < f32::EPSILON);
        assert_eq!(border.color(), Color::rgb(0, 0, 255));
        assert!(border.is_visible());
    }

    #[test]
    fn zero_thickness_draws_nothing() {
        let mut pixmap = Pixmap::new(20, 20).unwrap();
        let border = BorderSpec::new(0.0, Color::BLACK);
        border.stroke_edge(&mut pixmap);
        border.stroke_circle(&mut pixmap, 10.0, 10.0, 9.0);
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn edge_stroke_stays_inside() {
        let mut pixmap = Pixmap::new(20, 20).unwrap();
        BorderSpec::new(2.0, Color::rgb(255, 0, 0)).stroke_edge(&mut pixmap);
        assert_eq!(opaque(&pixmap, 0, 0), Color::rgb(255, 0, 0));
        assert_eq!(opaque(&pixmap, 19, 10), Color::rgb(255, 0, 0));
        assert_eq!(pixmap.pixel(10, 10).unwrap().alpha(), 0);
    }

    #[test]
    fn circle_stroke_leaves_center_clear() {
        let mut pixmap = Pixmap::new(20, 20).unwrap();
        BorderSpec::new(2.0, Color::BLACK).stroke_circle(&mut pixmap, 10.0, 10.0, 8.0);
        assert_eq!(pixmap.pixel(10, 10).unwrap().alpha(), 0);
        assert!(pixmap.pixel(10, 2).unwrap().alpha() > 0);
    }
}
