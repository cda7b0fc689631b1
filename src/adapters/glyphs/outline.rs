//! TrueType/OpenType glyph outlines via `skrifa`.

use std::path::Path as FsPath;

use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider};
use tiny_skia::{Path, PathBuilder};

use crate::error::AvatarError;
use crate::ports::GlyphSource;

/// A font file held in memory.
///
/// The bytes are validated once when loaded; each outline request re-borrows
/// them as a `FontRef`.
#[derive(Debug, Clone)]
pub struct OutlineFont {
    data: Vec<u8>,
    index: u32,
    label: String,
}

impl OutlineFont {
    /// Wrap raw font bytes (the first face of a collection).
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a readable font.
    pub fn from_bytes(data: Vec<u8>, label: impl Into<String>) -> Result<Self, AvatarError> {
        FontRef::from_index(&data, 0).map_err(|e| AvatarError::Font(format!("Failed to parse font: {e}")))?;
        Ok(Self { data, index: 0, label: label.into() })
    }

    /// Load a font file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a font.
    pub fn load(path: &FsPath) -> Result<Self, AvatarError> {
        let data = std::fs::read(path)
            .map_err(|e| AvatarError::Font(format!("Failed to read font {}: {e}", path.display())))?;
        Self::from_bytes(data, path.display().to_string())
    }

    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.index).ok()
    }
}

/// Collects font-space outline commands into a y-down `tiny-skia` path.
struct SkiaPen {
    builder: PathBuilder,
}

impl OutlinePen for SkiaPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, -y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, -y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder.quad_to(cx0, -cy0, x, -y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(cx0, -cy0, cx1, -cy1, x, -y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

impl GlyphSource for OutlineFont {
    fn outline(&self, ch: char, size: f32) -> Option<Path> {
        if !size.is_finite() || size <= 0.0 {
            return None;
        }
        let font = self.font()?;
        // Unmapped characters draw .notdef, like any text renderer would.
        let glyph_id = font.charmap().map(ch).unwrap_or(GlyphId::NOTDEF);
        let glyph = font.outline_glyphs().get(glyph_id)?;

        let mut pen = SkiaPen { builder: PathBuilder::new() };
        let settings = DrawSettings::unhinted(Size::new(size), LocationRef::default());
        glyph.draw(settings, &mut pen).ok()?;
        pen.builder.finish()
    }

    fn name(&self) -> String {
        self.label.clone()
    }
}
