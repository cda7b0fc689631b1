//! Color picker adapters.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::color::{Color, Theme};
use crate::ports::ColorPicker;

/// Picks tones at random from a theme using a small linear-congruential PRNG.
///
/// Seeded explicitly for reproducible output, or from the system clock.
#[derive(Debug, Clone)]
pub struct RandomPalette {
    state: u32,
}

impl RandomPalette {
    /// Create a picker with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a picker seeded from the current time.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().subsec_nanos();
        Self::with_seed(nanos)
    }

    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_103_515_245).wrapping_add(12345);
        (self.state >> 16) & 0x7FFF
    }
}

impl Default for RandomPalette {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl ColorPicker for RandomPalette {
    fn pick(&mut self, theme: Theme) -> Color {
        let tones = theme.tones();
        tones[self.next() as usize % tones.len()]
    }
}

/// Always answers with the same color, whatever the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColor(pub Color);

impl ColorPicker for FixedColor {
    fn pick(&mut self, _theme: Theme) -> Color {
        self.0
    }
}
