//! Avatargen - placeholder avatar CLI.

mod cli;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use avatargen::adapters::fallback::load_fallback;
use avatargen::adapters::glyphs::{BitmapFont, OutlineFont};
use avatargen::adapters::palette::RandomPalette;
use avatargen::config::{self, Config};
use avatargen::generator::DEFAULT_BORDER_THICKNESS;
use avatargen::output::{data_uri, resolve_output_path, save_avatar};
use avatargen::ports::GlyphSource;
use avatargen::{AvatarError, AvatarGenerator, AvatarKind, BorderSpec, Resources, Shape};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AvatarError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(AvatarError::Config)?;
    let render = &config.render;

    // Resolve host resources
    let density = cli.density.or(render.density).unwrap_or(1.0);
    let font: Box<dyn GlyphSource> = match cli.font.as_deref().map(PathBuf::from).or_else(|| render.font.clone()) {
        Some(path) => Box::new(OutlineFont::load(&path)?),
        None => Box::new(BitmapFont),
    };
    let fallback = match cli.fallback.as_deref().map(PathBuf::from).or_else(|| render.fallback.clone()) {
        Some(path) => Some(load_fallback(&path)?),
        None => None,
    };
    let palette = match cli.seed.or(config.palette.seed) {
        Some(seed) => RandomPalette::with_seed(seed),
        None => RandomPalette::from_clock(),
    };

    let mut generator =
        AvatarGenerator::new(Resources { density, font, fallback, palette: Box::new(palette) })?;
    generator.set_background_theme(cli.theme.unwrap_or(config.palette.background));
    generator.set_border_theme(config.palette.border);

    // Dimensions and glyph styling
    if let Some(size) = cli.size {
        generator.set_uniform_size(size);
    } else {
        let width = cli.width.or(render.width);
        let height = cli.height.or(render.height);
        if width.is_some() || height.is_some() {
            generator.set_size(
                width.unwrap_or(generator.width()),
                height.unwrap_or(generator.height()),
            );
        }
    }
    if let Some(color) = cli.text_color.or(render.text_color) {
        generator.set_text_color(color);
    }
    if let Some(size) = cli.font_size.or(render.font_size) {
        generator.set_font_size(size);
    }

    let border = resolve_border(&cli, &config)?;
    let shape = cli.shape.or(render.shape).unwrap_or_default();
    let format = cli.format.unwrap_or(config.output.format);

    if cli.verbose {
        eprintln!("Config: {}", config_path.display());
        eprintln!("Size: {}x{} (density {})", generator.width(), generator.height(), density);
        eprintln!("Font: {} at {}px", generator.font_name(), generator.font_size());
        eprintln!("Shape: {shape}");
        if let Some(ref b) = border {
            eprintln!("Border: {} x {}px", b.color(), b.thickness());
        }
    }
    if cli.radius != 0 && shape == Shape::Rect {
        eprintln!("Warning: --radius only applies to circle avatars");
    }

    // Generate
    let avatar = match shape {
        Shape::Rect => generator.generate_avatar(&cli.label, cli.background, border.as_ref())?,
        Shape::Circle => generator.generate_circular_avatar(
            &cli.label,
            cli.radius,
            cli.background,
            border.as_ref(),
        )?,
    }
    .ok_or_else(|| AvatarError::InvalidArgument("label must not be empty".to_string()))?;

    if cli.verbose {
        match avatar.kind() {
            AvatarKind::Glyph(ch) => eprintln!("Drew glyph '{ch}'"),
            AvatarKind::Fallback => eprintln!("Drew fallback image"),
        }
        eprintln!("Output: {}x{} {format}", avatar.width(), avatar.height());
    }

    // Emit
    if cli.data_uri {
        println!("{}", data_uri(&avatar, format)?);
    } else {
        let output_path = resolve_output_path(cli.output.as_deref(), &cli.label, format);
        save_avatar(&avatar, format, &output_path)?;
        eprintln!("Saved: {}", output_path.display());
    }

    Ok(())
}

/// CLI border flags override the config file's `[border]` table.
fn resolve_border(cli: &Cli, config: &Config) -> Result<Option<BorderSpec>, AvatarError> {
    let color = cli.border_color.or_else(|| config.border.as_ref().map(|b| b.color));
    let thickness = cli.border_width.or_else(|| config.border.as_ref().map(|b| b.thickness));
    match (color, thickness) {
        (Some(color), thickness) => {
            Ok(Some(BorderSpec::new(thickness.unwrap_or(DEFAULT_BORDER_THICKNESS), color)))
        }
        (None, Some(_)) => Err(AvatarError::InvalidArgument(
            "--border-width needs a border color (--border-color or [border] color)".to_string(),
        )),
        (None, None) => Ok(None),
    }
}
