//! TUI rendering: layout for the message viewer.

mod footer;
mod header;
mod message;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::App;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    header::draw_header(f, app, chunks[0]);
    message::draw_message(f, app, chunks[1]);
    footer::draw_footer(f, app, chunks[2]);
}
