//! Per-line classification.

use std::sync::LazyLock;

use regex::Regex;

use super::emoji::heading_emoji_prefix_len;
use super::numbering::collapse_leading_numbering;

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").expect("valid regex"));

static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("valid regex"));

const BULLETS: [char; 3] = ['•', '-', '*'];

/// Minimum length (exclusive) of an all-caps line treated as a heading.
const CAPS_HEADING_MIN_LEN: usize = 3;

/// What a single line of normalized text represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Numbered,
    Bullet,
    Heading,
    Paragraph,
    Blank,
}

impl LineKind {
    /// Classify a line already passed through [`clean_line`].
    ///
    /// Precedence: numbered, bullet, heading, paragraph.
    pub fn of(cleaned: &str) -> Self {
        if cleaned.is_empty() {
            Self::Blank
        } else if NUMBERED_ITEM.is_match(cleaned) {
            Self::Numbered
        } else if cleaned.starts_with(BULLETS) {
            Self::Bullet
        } else if heading_emoji_prefix_len(cleaned).is_some() || is_caps_heading(cleaned) {
            Self::Heading
        } else {
            Self::Paragraph
        }
    }
}

/// Trim a line and collapse duplicated numbering at its start.
pub fn clean_line(line: &str) -> String {
    collapse_leading_numbering(line.trim()).trim_end().to_string()
}

/// Clean and classify a raw line.
pub fn classify_line(line: &str) -> LineKind {
    LineKind::of(&clean_line(line))
}

/// Whole line is uppercase letters, whitespace and `:!?`, with at least one letter.
fn is_caps_heading(line: &str) -> bool {
    line.chars().count() > CAPS_HEADING_MIN_LEN
        && line.chars().any(|c| c.is_ascii_uppercase())
        && line
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_whitespace() || matches!(c, ':' | '!' | '?'))
}

/// Item text of a numbered line (`"2. Book flights"` gives `"Book flights"`).
pub fn strip_number(line: &str) -> &str {
    match NUMBERED_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Item text of a bullet line, without the glyph and following whitespace.
pub fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(BULLETS).unwrap_or(line).trim_start()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \t"), LineKind::Blank);
    }

    #[test]
    fn numbered_items() {
        assert_eq!(classify_line("1. Book flights"), LineKind::Numbered);
        assert_eq!(classify_line("  12.\tDinner"), LineKind::Numbered);
        assert_eq!(classify_line("1.5 million"), LineKind::Paragraph);
        assert_eq!(classify_line("1."), LineKind::Paragraph);
    }

    #[test]
    fn bullet_items_with_or_without_space() {
        assert_eq!(classify_line("• Spa"), LineKind::Bullet);
        assert_eq!(classify_line("- Golf"), LineKind::Bullet);
        assert_eq!(classify_line("*Tennis"), LineKind::Bullet);
    }

    #[test]
    fn emoji_and_caps_headings() {
        assert_eq!(classify_line("📋 Trip Summary"), LineKind::Heading);
        assert_eq!(classify_line("✈\u{FE0F} Flights"), LineKind::Heading);
        assert_eq!(classify_line("TRIP DETAILS:"), LineKind::Heading);
        assert_eq!(classify_line("WOW!"), LineKind::Heading);
        assert_eq!(classify_line("USA"), LineKind::Paragraph);
        assert_eq!(classify_line("????"), LineKind::Paragraph);
        assert_eq!(classify_line("Trip summary"), LineKind::Paragraph);
    }

    #[test]
    fn list_markers_win_over_headings() {
        assert_eq!(classify_line("- IMPORTANT NOTE"), LineKind::Bullet);
        assert_eq!(classify_line("1. BOOK NOW"), LineKind::Numbered);
    }

    #[test]
    fn clean_line_collapses_leading_duplicates() {
        assert_eq!(clean_line("  2.  2. Hotel  "), "2. Hotel");
        assert_eq!(classify_line("3. 3. Dinner"), LineKind::Numbered);
        assert_eq!(clean_line("1.\u{A0}1.\u{A0}Spa"), "1. Spa");
    }

    #[test]
    fn bare_duplicate_marker_is_not_a_list_item() {
        assert_eq!(clean_line("1. 1."), "1.");
        assert_eq!(classify_line("1. 1."), LineKind::Paragraph);
    }

    #[test]
    fn strips_markers() {
        assert_eq!(strip_number("2. Book flights"), "Book flights");
        assert_eq!(strip_number("10.   Wrap up"), "Wrap up");
        assert_eq!(strip_bullet("• Item A"), "Item A");
        assert_eq!(strip_bullet("-Item"), "Item");
    }
}
