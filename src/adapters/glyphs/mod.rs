//! Glyph source adapters.
//!
//! - `bitmap` — built-in 5x7 block glyphs, no font file needed
//! - `outline` — TrueType/OpenType outlines read from a font file

pub mod bitmap;
pub mod outline;

pub use bitmap::BitmapFont;
pub use outline::OutlineFont;
