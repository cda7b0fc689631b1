//! Glyph source port: turns one character into a fillable outline.

use tiny_skia::Path;

/// Produces glyph outlines at a pixel size.
pub trait GlyphSource {
    /// Outline `ch` at `size` pixels per em.
    ///
    /// The path uses pixel units with y growing downwards and its origin on
    /// the baseline at the pen position, so ascenders have negative y.
    /// Returns `None` when there is nothing to fill.
    fn outline(&self, ch: char, size: f32) -> Option<Path>;

    /// Short human-readable name, shown in verbose output.
    fn name(&self) -> String;
}
