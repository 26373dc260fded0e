//! Message pane: styled blocks with a scrollbar.

use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use concierge_format::core::render::render_blocks;

use super::super::app::App;
use super::super::constants::ACCENT_SECONDARY;
use super::super::render::StyledRenderer;

/// Horizontal padding inside the border, per side.
const PADDING: u16 = 1;

/// All display lines of the message at `width` columns.
fn message_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    if app.blocks.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty message)",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    render_blocks(&StyledRenderer::new(width), &app.blocks)
        .into_iter()
        .flat_map(|rendered| rendered.element)
        .collect()
}

pub(crate) fn draw_message(f: &mut Frame, app: &mut App, area: Rect) {
    let frame = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_SECONDARY))
        .title(" Assistant ");
    let inner = frame.inner(area).inner(Margin {
        horizontal: PADDING,
        vertical: 0,
    });
    f.render_widget(frame, area);

    let lines = message_lines(app, inner.width as usize);
    let total = lines.len();
    app.set_viewport(total, inner.height as usize);
    let offset = app.scroll_line();

    let scroll_y = u16::try_from(offset).unwrap_or(u16::MAX);
    f.render_widget(Paragraph::new(lines).scroll((scroll_y, 0)), inner);

    if app.last_max_scroll > 0 {
        let mut state = ScrollbarState::new(app.last_max_scroll).position(offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }),
            &mut state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_shows_placeholder() {
        let app = App::new("stdin".into(), "", true, 80);
        let lines = message_lines(&app, 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content.as_ref(), "(empty message)");
    }

    #[test]
    fn lines_cover_every_block() {
        let app = App::new("stdin".into(), "📋 Trip\n1. A\n2. B\n\nBye.", true, 80);
        assert_eq!(message_lines(&app, 40).len(), 5);
    }
}
