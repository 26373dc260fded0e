//! Event handlers for the viewer: keyboard and mouse.

use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};

use super::app::App;
use super::constants;
use super::shortcuts::Shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub(crate) fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    let Some(shortcut) = Shortcut::match_key(&key) else {
        return HandleResult::Continue;
    };
    match shortcut {
        Shortcut::Quit => return HandleResult::Break,
        Shortcut::ScrollUp(n) => app.scroll_up(n),
        Shortcut::ScrollDown(n) => app.scroll_down(n),
        Shortcut::Top => app.scroll_to_top(),
        Shortcut::Follow => app.follow(),
        Shortcut::Copy => copy_message(app),
    }
    HandleResult::Continue
}

/// Handle a mouse event (wheel scrolling only).
pub(crate) fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
}

fn copy_message(app: &mut App) {
    let text = app.plain_text();
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
        Ok(()) => app.show_toast("Copied"),
        Err(e) => {
            log::debug!("Clipboard unavailable: {}", e);
            app.show_toast("Copy failed");
        }
    }
}
