//! Configuration file loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::{Color, Theme};
use crate::generator::DEFAULT_BORDER_THICKNESS;
use crate::params::{OutputFormat, Shape};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rendering defaults.
    #[serde(default)]
    pub render: RenderConfig,

    /// Palette themes and seed.
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Explicit border; absent means none for rectangles and the themed
    /// default for circles.
    #[serde(default)]
    pub border: Option<BorderConfig>,

    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Rendering defaults. Unset fields keep the generator's own defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Width in pixels.
    pub width: Option<u32>,
    /// Height in pixels.
    pub height: Option<u32>,
    /// Pixels per density-independent unit.
    pub density: Option<f32>,
    /// Glyph color.
    pub text_color: Option<Color>,
    /// Path to a TrueType/OpenType font.
    pub font: Option<PathBuf>,
    /// Glyph size in density-independent units.
    pub font_size: Option<f32>,
    /// Path to a fallback image.
    pub fallback: Option<PathBuf>,
    /// Avatar shape.
    pub shape: Option<Shape>,
}

/// Palette configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    /// Theme for random backgrounds.
    #[serde(default = "default_background_theme")]
    pub background: Theme,
    /// Theme for the default circular border.
    #[serde(default = "default_border_theme")]
    pub border: Theme,
    /// Seed for reproducible picks; the clock is used when absent.
    pub seed: Option<u32>,
}

fn default_background_theme() -> Theme {
    Theme::Blue
}

fn default_border_theme() -> Theme {
    Theme::Brown
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self { background: default_background_theme(), border: default_border_theme(), seed: None }
    }
}

/// Border configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BorderConfig {
    /// Stroke color.
    pub color: Color,
    /// Stroke thickness in pixels.
    #[serde(default = "default_border_thickness")]
    pub thickness: f32,
}

fn default_border_thickness() -> f32 {
    DEFAULT_BORDER_THICKNESS
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Encoded format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `AVATARGEN_CONFIG` environment variable
/// 3. `~/.config/avatargen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("AVATARGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/avatargen/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/avatargen/config.toml")
    } else {
        PathBuf::from("avatargen.toml")
    }
}
