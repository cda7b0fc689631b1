//! Avatargen - placeholder avatar rendering.
//!
//! An [`AvatarGenerator`] draws the uppercased first character of a label on
//! a colored background, or a fallback image when the label does not start
//! with a letter or digit, into a rectangular or circular raster.
//!
//! ```no_run
//! use avatargen::{avatar, circular_avatar, AvatarGenerator, Resources};
//!
//! let mut generator = AvatarGenerator::new(Resources::default())?;
//! generator.set_uniform_size(96);
//! let square = avatar("Ada Lovelace", &mut generator)?;
//! let round = circular_avatar("Grace Hopper", &mut generator)?;
//! # Ok::<(), avatargen::AvatarError>(())
//! ```

pub mod adapters;
pub mod avatar;
pub mod border;
pub mod color;
pub mod composite;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod params;
pub mod ports;
pub mod raster;

pub use avatar::{Avatar, AvatarKind};
pub use border::BorderSpec;
pub use color::{Color, Theme};
pub use error::AvatarError;
pub use generator::{AvatarGenerator, Resources};
pub use params::{OutputFormat, Shape};

/// Rectangular avatar for `label` with a themed background and no border.
///
/// # Errors
///
/// Returns an error if the raster cannot be allocated.
pub fn avatar(label: &str, generator: &mut AvatarGenerator) -> Result<Option<Avatar>, AvatarError> {
    generator.generate_avatar(label, None, None)
}

/// Circular avatar for `label` with automatic radius, themed background and
/// themed border.
///
/// # Errors
///
/// Returns an error if a raster cannot be allocated.
pub fn circular_avatar(
    label: &str,
    generator: &mut AvatarGenerator,
) -> Result<Option<Avatar>, AvatarError> {
    generator.generate_circular_avatar(label, 0, None, None)
}
