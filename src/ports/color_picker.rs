//! Color picker port for themed palette selection.

use crate::color::{Color, Theme};

/// Picks a color from a themed palette.
///
/// The generator asks for a background color when the caller gives none and
/// for a border color when a circular avatar has no explicit border.
pub trait ColorPicker {
    /// Pick a color from `theme`.
    fn pick(&mut self, theme: Theme) -> Color;
}

impl<F> ColorPicker for F
where
    F: FnMut(Theme) -> Color,
{
    fn pick(&mut self, theme: Theme) -> Color {
        self(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_pickers() {
        let mut calls = Vec::new();
        let mut picker = |theme: Theme| {
            calls.push(theme);
            Color::BLACK
        };
        assert_eq!(picker.pick(Theme::Blue), Color::BLACK);
        assert_eq!(picker.pick(Theme::Brown), Color::BLACK);
        assert_eq!(calls, vec![Theme::Blue, Theme::Brown]);
    }
}
