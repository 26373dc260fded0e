//! Curated heading emoji used by concierge-style responses.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Variation selector-16: requests emoji presentation of the preceding glyph.
const VS16: char = '\u{FE0F}';

/// Zero-width joiner inside emoji sequences.
const ZWJ: char = '\u{200D}';

/// Glyphs that mark a heading when they lead a line. Stored without VS16.
const HEADING_EMOJI: &[char] = &[
    '📋', // checklist
    '🎯', // target
    '📍', // pin
    '📌', // pushpin
    '📅', // calendar
    '📆', // tear-off calendar
    '🗓', // spiral calendar
    '✅', // check mark button
    '✔', // check mark
    '☑', // ballot box with check
    '💎', // gem
    '📞', // phone receiver
    '📱', // mobile phone
    '☎', // telephone
    '🎫', // ticket
    '🎟', // admission tickets
    '📊', // bar chart
    '📈', // chart increasing
    '✈', // airplane
    '🏨', // hotel
    '🍽', // fork and knife with plate
    '🚗', // car
    '💡', // light bulb
    '⭐', // star
    '🌟', // glowing star
    '💰', // money bag
    '📝', // memo
    'ℹ', // information
    '⚠', // warning
    '🎉', // party popper
    '⏰', // alarm clock
    '📧', // e-mail
    '🔑', // key
    '🏷', // label
];

static HEADING_SET: LazyLock<HashSet<char>> =
    LazyLock::new(|| HEADING_EMOJI.iter().copied().collect());

/// True if `c` is one of the curated heading glyphs.
pub fn is_heading_emoji(c: char) -> bool {
    HEADING_SET.contains(&c)
}

/// Byte length of the heading emoji at the start of `s` (including a trailing VS16), if any.
pub fn heading_emoji_prefix_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    if !is_heading_emoji(first) {
        return None;
    }
    match chars.next() {
        Some((i, VS16)) => Some(i + VS16.len_utf8()),
        Some((i, _)) => Some(i),
        None => Some(s.len()),
    }
}

/// True if `s` (already trimmed) is exactly one heading emoji and nothing else.
pub fn is_standalone_heading_emoji(s: &str) -> bool {
    heading_emoji_prefix_len(s) == Some(s.len()) && !s.is_empty()
}

/// Broad emoji test: curated glyphs, pictographic blocks, and sequence joiners.
pub fn is_emoji_like(c: char) -> bool {
    if is_heading_emoji(c) || c == VS16 || c == ZWJ {
        return true;
    }
    matches!(
        c as u32,
        0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_list_has_no_duplicates() {
        assert_eq!(HEADING_SET.len(), HEADING_EMOJI.len());
    }

    #[test]
    fn prefix_includes_variation_selector() {
        let s = "✈\u{FE0F} Flights";
        assert_eq!(heading_emoji_prefix_len(s), Some('✈'.len_utf8() + 3));
        assert_eq!(heading_emoji_prefix_len("📋 Trip"), Some('📋'.len_utf8()));
        assert_eq!(heading_emoji_prefix_len("Trip 📋"), None);
        assert_eq!(heading_emoji_prefix_len(""), None);
    }

    #[test]
    fn standalone_emoji_detection() {
        assert!(is_standalone_heading_emoji("📋"));
        assert!(is_standalone_heading_emoji("✅\u{FE0F}"));
        assert!(!is_standalone_heading_emoji("📋 Trip"));
        assert!(!is_standalone_heading_emoji("😀"));
        assert!(!is_standalone_heading_emoji(""));
    }

    #[test]
    fn emoji_like_covers_pictographs_and_joiners() {
        assert!(is_emoji_like('😀'));
        assert!(is_emoji_like('\u{200D}'));
        assert!(is_emoji_like('🎯'));
        assert!(!is_emoji_like('A'));
        assert!(!is_emoji_like('é'));
    }
}
