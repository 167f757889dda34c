//! Gradient progress bar.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::colors::Theme;

/// Columns taken by the percentage, e.g. " 100%".
const PERCENTAGE_WIDTH: u16 = 5;

/// A single-line progress bar at a fixed width.
pub struct ProgressBar<'a> {
    fraction: f64,
    width: u16,
    theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    /// Creates a bar `width` columns wide (percentage included).
    pub fn new(fraction: f64, width: u16, theme: &'a Theme) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
            width,
            theme,
        }
    }

    /// Number of cells available for the bar itself.
    pub fn cells(&self) -> u16 {
        if self.theme.show_percentage {
            self.width.saturating_sub(PERCENTAGE_WIDTH)
        } else {
            self.width
        }
    }

    /// Number of cells drawn as filled.
    pub fn filled(&self) -> u16 {
        let cells = self.cells();
        ((f64::from(cells) * self.fraction).round() as u16).min(cells)
    }

    /// Builds the spans making up the bar.
    pub fn to_line(&self) -> Line<'static> {
        let cells = self.cells();
        let filled = self.filled();
        let last = f64::from(cells.saturating_sub(1).max(1));

        let mut spans: Vec<Span<'static>> = (0..filled)
            .map(|i| {
                let color = self.theme.gradient_at(f64::from(i) / last);
                Span::styled(
                    self.theme.full_char.to_string(),
                    Style::default().fg(color),
                )
            })
            .collect();

        if filled < cells {
            let empty = self
                .theme
                .empty_char
                .to_string()
                .repeat(usize::from(cells - filled));
            spans.push(Span::styled(empty, Style::default().fg(self.theme.empty)));
        }

        if self.theme.show_percentage {
            spans.push(Span::raw(format!(" {:>3.0}%", self.fraction * 100.0)));
        }

        Line::from(spans)
    }
}
