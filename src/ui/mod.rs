//! UI rendering module.
//!
//! Builds the text block shown on screen: a padded progress bar and the
//! breathing instruction below it.

mod colors;
mod progress;

use ratatui::{
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub use colors::Theme;
use progress::ProgressBar;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    frame.render_widget(Paragraph::new(view(app, theme)), frame.area());
}

/// Renders the application state as styled text.
pub fn view(app: &App, theme: &Theme) -> Text<'static> {
    let pad = " ".repeat(usize::from(app.config.padding));
    let bar = ProgressBar::new(app.animation.fraction(), app.bar_width, theme);

    let mut bar_line = bar.to_line();
    bar_line.spans.insert(0, Span::raw(pad.clone()));

    let status_line = Line::from(vec![
        Span::raw(pad),
        Span::styled(app.animation.status_text(), theme.status_style()),
    ]);

    Text::from(vec![Line::from(""), bar_line, Line::from(""), status_line])
}
