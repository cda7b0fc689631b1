//! Unified error type for avatargen.

use thiserror::Error;

/// Errors that can occur while configuring or rendering avatars.
///
/// An empty label is not an error: the generation entry points return
/// `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A font file could not be read or parsed.
    #[error("Font error: {0}")]
    Font(String),

    /// Image decoding or encoding error.
    #[error("Image conversion error: {0}")]
    ImageConversion(String),

    /// A raster of the requested size could not be allocated.
    #[error("Cannot allocate a {width}x{height} raster")]
    Allocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}
