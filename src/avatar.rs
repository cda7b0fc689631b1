//! The avatar raster handed back to callers.

use std::io::Cursor;

use image::{DynamicImage, RgbImage, RgbaImage};
use tiny_skia::Pixmap;

use crate::color::Color;
use crate::error::AvatarError;
use crate::params::{OutputFormat, Shape};
use crate::raster::to_rgba_image;

/// Which branch produced an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarKind {
    /// The uppercased first character of the label was drawn.
    Glyph(char),
    /// The fallback image was drawn.
    Fallback,
}

/// A generated avatar. Owns its pixels.
#[derive(Debug, Clone)]
pub struct Avatar {
    pixmap: Pixmap,
    kind: AvatarKind,
    shape: Shape,
}

impl Avatar {
    pub(crate) fn new(pixmap: Pixmap, kind: AvatarKind, shape: Shape) -> Self {
        Self { pixmap, kind, shape }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Glyph or fallback.
    #[must_use]
    pub fn kind(&self) -> AvatarKind {
        self.kind
    }

    /// Rectangle or circle.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Straight-alpha color at (`x`, `y`), `None` when out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(Color::from_premultiplied)
    }

    /// The underlying premultiplied raster.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Copy into a straight-alpha `image` buffer.
    #[must_use]
    pub fn to_rgba_image(&self) -> RgbaImage {
        to_rgba_image(&self.pixmap)
    }

    /// Encode the avatar into `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails.
    pub fn encode(&self, format: OutputFormat) -> Result<Vec<u8>, AvatarError> {
        let rgba = self.to_rgba_image();
        let img = match format {
            OutputFormat::Jpeg => DynamicImage::ImageRgb8(flatten_on_white(&rgba)),
            OutputFormat::Png | OutputFormat::Webp => DynamicImage::ImageRgba8(rgba),
        };
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, format.image_format())
            .map_err(|e| AvatarError::ImageConversion(format!("Failed to encode as {format}: {e}")))?;
        Ok(bytes.into_inner())
    }
}

/// JPEG has no alpha; composite over white so cut-out corners stay light.
fn flatten_on_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let a = u16::from(a);
        let over = |c: u8| ((u16::from(c) * a + 255 * (255 - a) + 127) / 255) as u8;
        image::Rgb([over(r), over(g), over(b)])
    })
}
