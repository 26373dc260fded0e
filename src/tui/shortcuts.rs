//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action        | Keys                         |
//! |---------------|------------------------------|
//! | Scroll        | ↑ ↓ k j (3 lines)            |
//! | Page          | PageUp PageDown (10 lines)   |
//! | Top           | Home g                       |
//! | Follow bottom | End G                        |
//! | Copy message  | c                            |
//! | Quit          | q Esc Ctrl+C                 |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::constants::{SCROLL_LINES_PAGE, SCROLL_LINES_SMALL};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ScrollUp(usize),
    ScrollDown(usize),
    Top,
    /// Jump to the bottom and keep following new content.
    Follow,
    /// Copy the message as plain text
    Copy,
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches. Only key presses count (not repeats/releases).
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Shortcut::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Shortcut::ScrollUp(SCROLL_LINES_SMALL)),
            KeyCode::Down | KeyCode::Char('j') => Some(Shortcut::ScrollDown(SCROLL_LINES_SMALL)),
            KeyCode::PageUp => Some(Shortcut::ScrollUp(SCROLL_LINES_PAGE)),
            KeyCode::PageDown => Some(Shortcut::ScrollDown(SCROLL_LINES_PAGE)),
            KeyCode::Home | KeyCode::Char('g') => Some(Shortcut::Top),
            KeyCode::End | KeyCode::Char('G') => Some(Shortcut::Follow),
            KeyCode::Char('c') => Some(Shortcut::Copy),
            _ => None,
        }
    }
}
