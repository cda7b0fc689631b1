//! Port traits defining the capabilities the generator is handed.
//!
//! Each trait is a seam between the rendering core and something that would
//! otherwise be looked up globally (a random palette, a font). Implementations
//! live in `src/adapters/`.

pub mod color_picker;
pub mod glyph_source;

pub use color_picker::ColorPicker;
pub use glyph_source::GlyphSource;
