//! Viewer state: the formatted message, scroll position, and status.

use std::time::Instant;

use chrono::{DateTime, Local};

use concierge_format::core::format::{Block, format_message};
use concierge_format::core::render::render_plain;

use super::constants::TOAST_DURATION;

/// Scroll position of the message pane. `Bottom` follows the end of the content as it grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Line(0)
    }
}

pub struct App {
    /// File name or "stdin", shown in the header.
    pub(crate) source_label: String,
    pub(crate) blocks: Vec<Block>,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Wrap width used when copying the message as plain text.
    pub(crate) wrap_width: usize,
    /// True when the input file is polled for changes.
    pub(crate) watching: bool,
    pub(crate) last_reload: Option<DateTime<Local>>,
    /// Last reload or polling failure, shown in the footer until the next good reload.
    pub(crate) last_error: Option<String>,
    pub(crate) toast: Option<(String, Instant)>,
}

impl App {
    pub fn new(source_label: String, content: &str, follow: bool, wrap_width: usize) -> Self {
        Self {
            source_label,
            blocks: format_message(content),
            scroll: if follow {
                ScrollPosition::Bottom
            } else {
                ScrollPosition::default()
            },
            last_max_scroll: 0,
            wrap_width,
            watching: false,
            last_reload: None,
            last_error: None,
            toast: None,
        }
    }

    /// Replace the message. A pinned scroll line is kept; `Bottom` keeps following.
    pub(crate) fn set_content(&mut self, content: &str) {
        self.blocks = format_message(content);
        self.last_reload = Some(Local::now());
        self.last_error = None;
    }

    pub(crate) fn is_following(&self) -> bool {
        self.scroll == ScrollPosition::Bottom
    }

    /// Record the content height so scrolling can be clamped and `Bottom` resolved.
    pub(crate) fn set_viewport(&mut self, total_lines: usize, visible_lines: usize) {
        self.last_max_scroll = total_lines.saturating_sub(visible_lines);
    }

    /// When at bottom, set scroll to the concrete max line so scroll up/down work.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line((pos + n).min(self.last_max_scroll));
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.scroll = ScrollPosition::Line(0);
    }

    pub(crate) fn follow(&mut self) {
        self.scroll = ScrollPosition::Bottom;
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }

    /// The message as wrapped plain text, for the clipboard.
    pub(crate) fn plain_text(&self) -> String {
        render_plain(&self.blocks, self.wrap_width)
    }

    pub(crate) fn show_toast(&mut self, text: impl Into<String>) {
        self.toast = Some((text.into(), Instant::now() + TOAST_DURATION));
    }

    /// Toast text while it has not expired.
    pub(crate) fn active_toast(&self, now: Instant) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|(_, until)| *until > now)
            .map(|(text, _)| text.as_str())
    }
}
