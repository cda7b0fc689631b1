//! Output shape and encoding parameters.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Shape of a generated avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// `width × height` raster.
    #[default]
    Rect,
    /// `min(width, height)` square masked to a circle.
    Circle,
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" | "rectangle" | "square" => Ok(Shape::Rect),
            "circle" | "circular" | "round" => Ok(Shape::Circle),
            _ => Err(format!("Unsupported shape '{s}'. Valid: rect, circle")),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Rect => "rect",
            Shape::Circle => "circle",
        })
    }
}

/// Encoded file format of a saved avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PNG, keeps transparency.
    #[default]
    Png,
    /// JPEG, transparency is flattened onto white.
    Jpeg,
    /// Lossless WebP, keeps transparency.
    Webp,
}

impl OutputFormat {
    /// File extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Webp => "webp",
        }
    }

    /// MIME type for this format.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Webp => "image/webp",
        }
    }

    pub(crate) fn image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Webp => image::ImageFormat::WebP,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "webp" => Ok(OutputFormat::Webp),
            _ => Err(format!("Unsupported format '{s}'. Valid: png, jpeg, webp")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Webp => "webp",
        })
    }
}
