//! Color theme for the progress bar and status line.
//!
//! The theme is a plain value handed to the renderer, so tests and callers
//! can swap it without touching any global.

use ratatui::style::{Color, Style};

/// Gradient start (left end of the bar)
pub const GRADIENT_START: (u8, u8, u8) = (90, 86, 224); // Indigo
/// Gradient end (right end of the bar)
pub const GRADIENT_END: (u8, u8, u8) = (238, 111, 248); // Pink
/// Unfilled part of the bar
pub const EMPTY: Color = Color::Rgb(96, 96, 96); // Gray
/// Status line text
pub const MUTED: Color = Color::Rgb(98, 98, 98); // Dim gray

/// Everything the renderer needs to know about looks.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub gradient_start: (u8, u8, u8),
    pub gradient_end: (u8, u8, u8),
    pub empty: Color,
    pub muted: Color,
    /// Glyph for filled cells
    pub full_char: char,
    /// Glyph for empty cells
    pub empty_char: char,
    /// Append " 42%" after the bar?
    pub show_percentage: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            gradient_start: GRADIENT_START,
            gradient_end: GRADIENT_END,
            empty: EMPTY,
            muted: MUTED,
            full_char: '█',
            empty_char: '░',
            show_percentage: true,
        }
    }
}

impl Theme {
    /// Color of the gradient at position `t` in [0, 1].
    pub fn gradient_at(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        let (r1, g1, b1) = self.gradient_start;
        let (r2, g2, b2) = self.gradient_end;
        Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
    }

    /// Style of the status line.
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
