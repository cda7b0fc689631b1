//! CLI argument parsing with clap.

use clap::Parser;

use avatargen::color::{Color, Theme};
use avatargen::params::{OutputFormat, Shape};

/// Placeholder avatar generator: the first letter of a name on a colored
/// background, or a fallback image.
#[derive(Parser, Debug)]
#[command(name = "avatargen", version, about)]
pub struct Cli {
    /// Label to draw, usually a display name. Its first character decides
    /// between the letter and the fallback image.
    pub label: String,

    /// Avatar shape: rect or circle.
    #[arg(long)]
    pub shape: Option<Shape>,

    /// Width and height in pixels.
    #[arg(short, long, conflicts_with_all = ["width", "height"])]
    pub size: Option<u32>,

    /// Width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Circle radius in pixels; 0 fills the square (circle shape only).
    #[arg(short, long, default_value = "0")]
    pub radius: u32,

    /// Background color (#RRGGBB or #AARRGGBB); random from the theme if omitted.
    #[arg(short, long)]
    pub background: Option<Color>,

    /// Palette theme for random backgrounds.
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Glyph color.
    #[arg(long)]
    pub text_color: Option<Color>,

    /// Path to a TrueType/OpenType font (built-in block font if omitted).
    #[arg(long)]
    pub font: Option<String>,

    /// Glyph size in density-independent units.
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Path to a fallback image for labels not starting with a letter or digit.
    #[arg(long)]
    pub fallback: Option<String>,

    /// Pixels per density-independent unit.
    #[arg(short, long)]
    pub density: Option<f32>,

    /// Border color.
    #[arg(long)]
    pub border_color: Option<Color>,

    /// Border thickness in pixels.
    #[arg(long)]
    pub border_width: Option<f32>,

    /// Seed for reproducible palette picks.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Output format: png, jpeg, webp.
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (auto-generated if not specified).
    #[arg(short, long, conflicts_with = "data_uri")]
    pub output: Option<String>,

    /// Print a data: URI to stdout instead of writing a file.
    #[arg(long)]
    pub data_uri: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
