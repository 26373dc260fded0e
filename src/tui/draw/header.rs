//! Header: logo, source, block count, and follow/reload status.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use concierge_format::core::app as app_info;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY, LOGO};

/// Status text on the right of the header ("following · updated 14:32:05").
fn status_text(app: &App) -> String {
    let mut parts = Vec::new();
    if app.is_following() {
        parts.push("following".to_string());
    } else {
        parts.push(format!("line {}", app.scroll_line() + 1));
    }
    if app.watching {
        match app.last_reload {
            Some(t) => parts.push(format!("updated {}", t.format("%H:%M:%S"))),
            None => parts.push("watching".to_string()),
        }
    }
    parts.join(" · ")
}

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled(format!("{} ", LOGO), Style::default().fg(ACCENT)),
        Span::styled(format!("{} ", app_info::NAME), dim),
        Span::styled(app.source_label.clone(), Style::default().fg(ACCENT_SECONDARY)),
        Span::styled(format!(" · {} blocks · ", app.blocks.len()), dim),
        Span::styled(status_text(app), dim),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_shows_follow_or_line() {
        let mut app = App::new("reply.txt".into(), "Hi", true, 80);
        assert_eq!(status_text(&app), "following");
        app.set_viewport(20, 5);
        app.scroll_up(3);
        assert_eq!(status_text(&app), "line 13");
    }

    #[test]
    fn status_shows_watch_state() {
        let mut app = App::new("reply.txt".into(), "Hi", true, 80);
        app.watching = true;
        assert_eq!(status_text(&app), "following · watching");
        app.set_content("Hello");
        assert!(status_text(&app).starts_with("following · updated "));
    }
}
