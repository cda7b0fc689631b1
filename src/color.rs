//! Colors, hex parsing and the themed Material palettes.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tiny_skia::PremultipliedColorU8;

/// A straight-alpha RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque white, the default text color.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build a color from all four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    /// Build an opaque color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// True when the alpha channel is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 0xFF
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    pub(crate) fn from_premultiplied(pixel: PremultipliedColorU8) -> Self {
        let c = pixel.demultiply();
        Self::rgba(c.red(), c.green(), c.blue(), c.alpha())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parse `#RRGGBB` or `#AARRGGBB` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || format!("Invalid color '{s}'. Expected #RRGGBB or #AARRGGBB");
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Self::from_rgb_u32(value)),
            8 => Ok(Self::rgba((value >> 16) as u8, (value >> 8) as u8, value as u8, (value >> 24) as u8)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A named Material hue the color pickers choose tones from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Blue tones, the default avatar background.
    Blue,
    /// Brown tones, the default circular border.
    Brown,
    /// Red tones.
    Red,
    /// Pink tones.
    Pink,
    /// Purple tones.
    Purple,
    /// Indigo tones.
    Indigo,
    /// Teal tones.
    Teal,
    /// Green tones.
    Green,
    /// Orange tones.
    Orange,
    /// Grey tones.
    Grey,
}

// Material 300..900 shades.
const BLUE: [u32; 7] = [0x64B5F6, 0x42A5F5, 0x2196F3, 0x1E88E5, 0x1976D2, 0x1565C0, 0x0D47A1];
const BROWN: [u32; 7] = [0xA1887F, 0x8D6E63, 0x795548, 0x6D4C41, 0x5D4037, 0x4E342E, 0x3E2723];
const RED: [u32; 7] = [0xE57373, 0xEF5350, 0xF44336, 0xE53935, 0xD32F2F, 0xC62828, 0xB71C1C];
const PINK: [u32; 7] = [0xF06292, 0xEC407A, 0xE91E63, 0xD81B60, 0xC2185B, 0xAD1457, 0x880E4F];
const PURPLE: [u32; 7] = [0xBA68C8, 0xAB47BC, 0x9C27B0, 0x8E24AA, 0x7B1FA2, 0x6A1B9A, 0x4A148C];
const INDIGO: [u32; 7] = [0x7986CB, 0x5C6BC0, 0x3F51B5, 0x3949AB, 0x303F9F, 0x283593, 0x1A237E];
const TEAL: [u32; 7] = [0x4DB6AC, 0x26A69A, 0x009688, 0x00897B, 0x00796B, 0x00695C, 0x004D40];
const GREEN: [u32; 7] = [0x81C784, 0x66BB6A, 0x4CAF50, 0x43A047, 0x388E3C, 0x2E7D32, 0x1B5E20];
const ORANGE: [u32; 7] = [0xFFB74D, 0xFFA726, 0xFF9800, 0xFB8C00, 0xF57C00, 0xEF6C00, 0xE65100];
const GREY: [u32; 7] = [0xE0E0E0, 0xBDBDBD, 0x9E9E9E, 0x757575, 0x616161, 0x424242, 0x212121];

impl Theme {
    /// Every theme, in declaration order.
    pub const ALL: [Theme; 10] = [
        Theme::Blue,
        Theme::Brown,
        Theme::Red,
        Theme::Pink,
        Theme::Purple,
        Theme::Indigo,
        Theme::Teal,
        Theme::Green,
        Theme::Orange,
        Theme::Grey,
    ];

    /// The tones of this theme, lightest first.
    #[must_use]
    pub fn tones(self) -> Vec<Color> {
        let table = match self {
            Theme::Blue => &BLUE,
            Theme::Brown => &BROWN,
            Theme::Red => &RED,
            Theme::Pink => &PINK,
            Theme::Purple => &PURPLE,
            Theme::Indigo => &INDIGO,
            Theme::Teal => &TEAL,
            Theme::Green => &GREEN,
            Theme::Orange => &ORANGE,
            Theme::Grey => &GREY,
        };
        table.iter().map(|&rgb| Color::from_rgb_u32(rgb)).collect()
    }

    /// Lowercase name, as accepted by [`Theme::from_str`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Blue => "blue",
            Theme::Brown => "brown",
            Theme::Red => "red",
            Theme::Pink => "pink",
            Theme::Purple => "purple",
            Theme::Indigo => "indigo",
            Theme::Teal => "teal",
            Theme::Green => "green",
            Theme::Orange => "orange",
            Theme::Grey => "grey",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = if wanted == "gray" { "grey".to_string() } else { wanted };
        Theme::ALL.into_iter().find(|t| t.name() == wanted).ok_or_else(|| {
            let valid: Vec<&str> = Theme::ALL.iter().map(|t| t.name()).collect();
            format!("Unknown theme '{s}'. Valid: {}", valid.join(", "))
        })
    }
}
