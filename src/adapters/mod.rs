//! Adapter implementations for port traits, plus fallback image sources.
//!
//! - `palette` — random and fixed color pickers
//! - `glyphs/` — built-in block font and font-file outlines
//! - `fallback` — built-in silhouette and image-file fallbacks

pub mod fallback;
pub mod glyphs;
pub mod palette;
