//! The avatar generator: configuration plus the two generation entry points.

use tiny_skia::{FillRule, Paint, Pixmap, PixmapPaint, Transform};

use crate::adapters::fallback::default_fallback;
use crate::adapters::glyphs::BitmapFont;
use crate::adapters::palette::RandomPalette;
use crate::avatar::{Avatar, AvatarKind};
use crate::border::BorderSpec;
use crate::color::{Color, Theme};
use crate::composite::{circular_crop, CircleSource};
use crate::error::AvatarError;
use crate::params::Shape;
use crate::ports::{ColorPicker, GlyphSource};
use crate::raster::{from_rgba_image, new_pixmap};

/// Default avatar side, in density-independent units.
pub const DEFAULT_SIZE: f32 = 50.0;
/// Default glyph size, in density-independent units.
pub const DEFAULT_FONT_SIZE: f32 = 25.0;
/// Thickness of the circular border drawn when the caller supplies none.
pub const DEFAULT_BORDER_THICKNESS: f32 = 2.0;

/// Host resources handed to a generator at construction.
pub struct Resources {
    /// Pixels per density-independent unit. Must be positive.
    pub density: f32,
    /// Glyph source used on the glyph path.
    pub font: Box<dyn GlyphSource>,
    /// Fallback raster; `None` selects the built-in silhouette.
    pub fallback: Option<Pixmap>,
    /// Source of themed colors for backgrounds and default borders.
    pub palette: Box<dyn ColorPicker>,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            density: 1.0,
            font: Box::new(BitmapFont),
            fallback: None,
            palette: Box::new(RandomPalette::from_clock()),
        }
    }
}

enum Fallback {
    /// Built-in silhouette, re-derived when the size changes.
    Builtin(Pixmap),
    /// Caller-supplied raster, used verbatim.
    Custom(Pixmap),
}

impl Fallback {
    fn raster(&self) -> &Pixmap {
        match self {
            Fallback::Builtin(p) | Fallback::Custom(p) => p,
        }
    }
}

/// Renders letter and fallback avatars.
///
/// Configure once, then call [`generate_avatar`](Self::generate_avatar) or
/// [`generate_circular_avatar`](Self::generate_circular_avatar) per label.
/// Not meant to be shared between threads while it is being reconfigured;
/// use one generator per thread.
pub struct AvatarGenerator {
    width: u32,
    height: u32,
    density: f32,
    text_color: Color,
    font: Box<dyn GlyphSource>,
    font_size: f32,
    fallback: Fallback,
    palette: Box<dyn ColorPicker>,
    background_theme: Theme,
    border_theme: Theme,
    text_paint: Paint<'static>,
}

impl AvatarGenerator {
    /// Create a generator with default size, white text and the given
    /// resources.
    ///
    /// # Errors
    ///
    /// Returns an error if the density is not a positive number or the
    /// built-in fallback cannot be allocated.
    pub fn new(resources: Resources) -> Result<Self, AvatarError> {
        let Resources { density, font, fallback, palette } = resources;
        if !density.is_finite() || density <= 0.0 {
            return Err(AvatarError::InvalidArgument(format!(
                "Density must be a positive number, got {density}"
            )));
        }
        let side = dp_to_px(DEFAULT_SIZE, density);
        let fallback = match fallback {
            Some(p) => Fallback::Custom(p),
            None => Fallback::Builtin(default_fallback(side)?),
        };
        let mut generator = Self {
            width: side,
            height: side,
            density,
            text_color: Color::WHITE,
            font,
            font_size: DEFAULT_FONT_SIZE * density,
            fallback,
            palette,
            background_theme: Theme::Blue,
            border_theme: Theme::Brown,
            text_paint: Paint::default(),
        };
        generator.sync_paint();
        Ok(generator)
    }

    /// Target width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Target height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per density-independent unit.
    #[must_use]
    pub fn density(&self) -> f32 {
        self.density
    }

    /// Glyph color.
    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Glyph size in pixels.
    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Name of the current glyph source.
    #[must_use]
    pub fn font_name(&self) -> String {
        self.font.name()
    }

    /// The raster drawn on the fallback path.
    #[must_use]
    pub fn fallback(&self) -> &Pixmap {
        self.fallback.raster()
    }

    /// Side of the default size, in pixels, at the current density.
    #[must_use]
    pub fn default_side(&self) -> u32 {
        dp_to_px(DEFAULT_SIZE, self.density)
    }

    /// Set width and height to `dimension`. Zero is ignored.
    pub fn set_uniform_size(&mut self, dimension: u32) {
        if dimension == 0 {
            return;
        }
        self.resize(dimension, dimension);
    }

    /// Set width and height. If either is zero both fall back to the default.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            let side = self.default_side();
            self.resize(side, side);
        } else {
            self.resize(width, height);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if let Fallback::Builtin(_) = self.fallback {
            // Keep the old silhouette if the new one cannot be allocated.
            if let Ok(p) = default_fallback(width.min(height)) {
                self.fallback = Fallback::Builtin(p);
            }
        }
    }

    /// Set the glyph color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        self.sync_paint();
    }

    /// Replace the glyph source.
    pub fn set_font(&mut self, font: Box<dyn GlyphSource>) {
        self.font = font;
        self.sync_paint();
    }

    /// Set the glyph size in density-independent units. Zero, negative and
    /// non-finite sizes are ignored.
    pub fn set_font_size(&mut self, size: f32) {
        if !size.is_finite() || size <= 0.0 {
            return;
        }
        self.font_size = size * self.density;
        self.sync_paint();
    }

    /// Use `raster` as the fallback image, unscaled.
    pub fn set_fallback(&mut self, raster: Pixmap) {
        self.fallback = Fallback::Custom(raster);
        self.sync_paint();
    }

    /// Use a decoded image as the fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension.
    pub fn set_fallback_image(&mut self, img: &image::DynamicImage) -> Result<(), AvatarError> {
        let raster = from_rgba_image(&img.to_rgba8())?;
        self.set_fallback(raster);
        Ok(())
    }

    /// Go back to the built-in silhouette.
    ///
    /// # Errors
    ///
    /// Returns an error if the silhouette cannot be allocated.
    pub fn reset_fallback(&mut self) -> Result<(), AvatarError> {
        self.fallback = Fallback::Builtin(default_fallback(self.width.min(self.height))?);
        Ok(())
    }

    /// Replace the color picker.
    pub fn set_palette(&mut self, palette: Box<dyn ColorPicker>) {
        self.palette = palette;
    }

    /// Theme random backgrounds are picked from (blue by default).
    pub fn set_background_theme(&mut self, theme: Theme) {
        self.background_theme = theme;
    }

    /// Theme the default circular border is picked from (brown by default).
    pub fn set_border_theme(&mut self, theme: Theme) {
        self.border_theme = theme;
    }

    fn sync_paint(&mut self) {
        self.text_paint.set_color(self.text_color.to_skia());
        self.text_paint.anti_alias = true;
    }

    /// Render a `width × height` avatar for `label`.
    ///
    /// Returns `Ok(None)` for an empty label. Without `background` a color
    /// is picked from the background theme. A visible `border` is stroked
    /// just inside the edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the raster cannot be allocated.
    pub fn generate_avatar(
        &mut self,
        label: &str,
        background: Option<Color>,
        border: Option<&BorderSpec>,
    ) -> Result<Option<Avatar>, AvatarError> {
        let Some(first) = label.chars().next() else {
            return Ok(None);
        };
        let background = background.unwrap_or_else(|| self.palette.pick(self.background_theme));
        let kind = classify(first);

        let mut pixmap = self.background_buffer(background)?;
        match kind {
            AvatarKind::Glyph(ch) => self.draw_glyph(&mut pixmap, ch),
            AvatarKind::Fallback => pixmap.draw_pixmap(
                0,
                0,
                self.fallback.raster().as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            ),
        }
        if let Some(border) = border {
            border.stroke_edge(&mut pixmap);
        }
        Ok(Some(Avatar::new(pixmap, kind, Shape::Rect)))
    }

    /// Render a circular avatar for `label`.
    ///
    /// The output is a `min(width, height)` square. `radius` 0 fills it;
    /// any other value sets the circle radius in pixels. Without `border`
    /// the rim gets a thin stroke picked from the border theme.
    ///
    /// # Errors
    ///
    /// Returns an error if a raster cannot be allocated.
    pub fn generate_circular_avatar(
        &mut self,
        label: &str,
        radius: u32,
        background: Option<Color>,
        border: Option<&BorderSpec>,
    ) -> Result<Option<Avatar>, AvatarError> {
        let Some(first) = label.chars().next() else {
            return Ok(None);
        };
        let background = background.unwrap_or_else(|| self.palette.pick(self.background_theme));
        let border = match border {
            Some(b) => b.clone(),
            None => BorderSpec::new(
                DEFAULT_BORDER_THICKNESS * self.density,
                self.palette.pick(self.border_theme),
            ),
        };
        let kind = classify(first);

        let pixmap = match kind {
            AvatarKind::Glyph(ch) => {
                let mut buffer = self.background_buffer(background)?;
                self.draw_glyph(&mut buffer, ch);
                circular_crop(CircleSource::Glyph(&buffer), radius, background, &border)?
            }
            AvatarKind::Fallback => {
                let source = CircleSource::Fallback {
                    raster: self.fallback.raster(),
                    side: self.width.min(self.height),
                };
                circular_crop(source, radius, background, &border)?
            }
        };
        Ok(Some(Avatar::new(pixmap, kind, Shape::Circle)))
    }

    fn background_buffer(&self, background: Color) -> Result<Pixmap, AvatarError> {
        let mut pixmap = new_pixmap(self.width, self.height)?;
        pixmap.fill(background.to_skia());
        Ok(pixmap)
    }

    /// Fill `ch` so its bounds are centered in the buffer.
    fn draw_glyph(&self, pixmap: &mut Pixmap, ch: char) {
        let Some(path) = self.font.outline(ch, self.font_size) else {
            return;
        };
        let bounds = path.bounds();
        let x = self.width as f32 / 2.0 - (bounds.left() + bounds.right()) / 2.0;
        // Baseline sits half the ascent-to-descent span below the middle.
        let baseline = self.height as f32 / 2.0 - (bounds.top() + bounds.bottom()) / 2.0;
        pixmap.fill_path(
            &path,
            &self.text_paint,
            FillRule::Winding,
            Transform::from_translate(x, baseline),
            None,
        );
    }
}

/// Glyph path for letters and digits (uppercased), fallback for the rest.
#[must_use]
pub fn classify(first: char) -> AvatarKind {
    if first.is_alphabetic() || first.is_numeric() {
        AvatarKind::Glyph(first.to_uppercase().next().unwrap_or(first))
    } else {
        AvatarKind::Fallback
    }
}

/// Convert density-independent units to whole pixels, at least one.
#[must_use]
pub fn dp_to_px(units: f32, density: f32) -> u32 {
    (units * density).round().max(1.0) as u32
}
