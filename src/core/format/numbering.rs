//! Collapsing of duplicated list numbering (`"1. 1. Text"`, `"2. 3. Text"`).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Anywhere in the text: a run `<N>. <M>. <K>. ` becomes `<N>. `. A run may also end a line.
static DUPLICATE_NUMBERING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(\d+)\.(?:[ \t]+\d+\.)+(?:[ \t]|$)").expect("valid regex")
});

/// At the start of a trimmed line, tolerating any whitespace between the markers.
static LEADING_DUPLICATE_NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(?:\s+\d+\.)+(?:\s+|$)").expect("valid regex"));

const REPLACEMENT: &str = "${1}. ";

/// Replace `re` matches with `REPLACEMENT` until nothing matches, counting the scans.
///
/// Each match covers a whole run of markers and its replacement is strictly shorter, so
/// the first scan already yields the fixed point and the second one confirms it. Every
/// scan is linear in the input.
fn collapse_counting_scans(input: &str, re: &Regex) -> (String, usize) {
    let mut current = input.to_string();
    let mut scans = 0;
    loop {
        scans += 1;
        match re.replace_all(&current, REPLACEMENT) {
            Cow::Borrowed(_) => return (current, scans),
            Cow::Owned(next) => {
                debug_assert!(next.len() < current.len());
                current = next;
            }
        }
    }
}

fn collapse_to_fixed_point(input: &str, re: &Regex) -> String {
    collapse_counting_scans(input, re).0
}

/// Collapse duplicated numbering anywhere in a message.
pub fn collapse_duplicate_numbering(text: &str) -> String {
    collapse_to_fixed_point(text, &DUPLICATE_NUMBERING)
}

/// Collapse duplicated numbering at the start of a single trimmed line.
pub fn collapse_leading_numbering(line: &str) -> String {
    collapse_to_fixed_point(line, &LEADING_DUPLICATE_NUMBERING)
}
