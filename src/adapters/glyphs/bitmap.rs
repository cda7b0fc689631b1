//! Built-in 5x7 block font.
//!
//! Each glyph is seven rows; the low five bits of a row are its pixels, bit 4
//! being the leftmost column. Covers `A-Z` and `0-9`, which is every glyph the
//! generator asks for once the label's first character is uppercased.
//! Anything else gets a hollow box.

use tiny_skia::{Path, PathBuilder, Rect};

use crate::ports::GlyphSource;

const COLUMNS: u8 = 5;
const ROWS: usize = 7;

/// Cap height as a fraction of the em size.
const CAP_HEIGHT: f32 = 0.7;

/// Block font compiled into the crate; the default glyph source.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    /// True when `ch` has a real glyph rather than the hollow box.
    #[must_use]
    pub fn covers(ch: char) -> bool {
        rows(ch).is_some()
    }
}

fn rows(ch: char) -> Option<[u8; ROWS]> {
    macro_rules! g {
        ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr, $g:expr) => {
            Some([$a, $b, $c, $d, $e, $f, $g])
        };
    }

    match ch {
        '0' => g!(0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110),
        '1' => g!(0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        '2' => g!(0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111),
        '3' => g!(0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110),
        '4' => g!(0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010),
        '5' => g!(0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110),
        '6' => g!(0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110),
        '7' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000),
        '8' => g!(0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110),
        '9' => g!(0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100),

        'A' => g!(0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'B' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110),
        'C' => g!(0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110),
        'D' => g!(0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100),
        'E' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111),
        'F' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000),
        'G' => g!(0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111),
        'H' => g!(0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'I' => g!(0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        'J' => g!(0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100),
        'K' => g!(0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001),
        'L' => g!(0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111),
        'M' => g!(0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001),
        'N' => g!(0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001),
        'O' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'P' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000),
        'Q' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101),
        'R' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001),
        'S' => g!(0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110),
        'T' => g!(0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        'U' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'V' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100),
        'W' => g!(0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010),
        'X' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001),
        'Y' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100),
        'Z' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111),

        _ => None,
    }
}

/// Hollow box drawn for characters the font does not cover.
const TOFU: [u8; ROWS] = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

impl GlyphSource for BitmapFont {
    fn outline(&self, ch: char, size: f32) -> Option<Path> {
        if !size.is_finite() || size <= 0.0 {
            return None;
        }
        let cell = size * CAP_HEIGHT / ROWS as f32;
        let bits = rows(ch).unwrap_or(TOFU);

        let mut pb = PathBuilder::new();
        for (row, bits) in bits.iter().enumerate() {
            // Bottom row sits on the baseline.
            let y = -((ROWS - row) as f32) * cell;
            for col in 0..COLUMNS {
                if bits & (1 << (COLUMNS - 1 - col)) != 0 {
                    pb.push_rect(Rect::from_xywh(f32::from(col) * cell, y, cell, cell)?);
                }
            }
        }
        pb.finish()
    }

    fn name(&self) -> String {
        "built-in 5x7".to_string()
    }
}
