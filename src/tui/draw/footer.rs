//! Footer: key hints, or a toast / error when one is active.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::app::App;
use super::super::constants::ACCENT;

const HINTS: &str = "↑↓ scroll · g top · G follow · c copy · q quit";

pub(crate) fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(toast) = app.active_toast(Instant::now()) {
        Line::from(Span::styled(format!(" {} ", toast), Style::default().fg(ACCENT)))
    } else if let Some(ref err) = app.last_error {
        Line::from(Span::styled(err.clone(), Style::default().fg(Color::Red)))
    } else {
        Line::from(Span::styled(HINTS, Style::default().fg(Color::DarkGray)))
    };
    f.render_widget(Paragraph::new(line), area);
}
