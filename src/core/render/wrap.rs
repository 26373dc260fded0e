//! Text wrapping for display.

/// Split text into lines of max width (columns). Uses textwrap for correct UTF-8 handling.
/// Width 0 disables wrapping.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Wrap `text` behind `prefix` (e.g. `"• "`), indenting continuation lines to the prefix width.
pub fn wrap_with_prefix(text: &str, prefix: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![prefix.trim_end().to_string()];
    }
    if width == 0 {
        return vec![format!("{}{}", prefix, text)];
    }
    let indent = " ".repeat(textwrap::core::display_width(prefix));
    let options = textwrap::Options::new(width)
        .initial_indent(prefix)
        .subsequent_indent(&indent);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_text_splits_on_words() {
        assert_eq!(wrap_text("hello world test", 8), ["hello", "world", "test"]);
    }

    #[test]
    fn wrap_text_zero_width_keeps_line() {
        assert_eq!(wrap_text("hello world", 0), ["hello world"]);
    }

    #[test]
    fn prefix_gets_hanging_indent() {
        assert_eq!(
            wrap_with_prefix("pack light bags", "• ", 10),
            ["• pack", "  light", "  bags"]
        );
        assert_eq!(wrap_with_prefix("one two", "10. ", 8), ["10. one", "    two"]);
    }

    #[test]
    fn empty_item_keeps_marker() {
        assert_eq!(wrap_with_prefix("", "• ", 20), ["•"]);
    }
}
