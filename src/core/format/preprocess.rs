//! Normalize a raw response into one logical element per line.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::emoji::{heading_emoji_prefix_len, is_emoji_like, is_standalone_heading_emoji};
use super::numbering::collapse_duplicate_numbering;

/// A numbered (`3. `) or bullet (`- `, `• `, `* `) marker after inline whitespace.
static INLINE_LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S)[ \t]+(\d+\.[ \t]|[-•*][ \t])").expect("valid regex")
});

/// Two or more uppercase words (with `:!?`) preceded by inline whitespace.
static CAPS_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t]+((?:[A-Z]+[:!?]*[ \t]+)+[A-Z]+[:!?]*)([ \t]|$)").expect("valid regex")
});

/// Minimum length (exclusive) of an uppercase run treated as a heading.
const CAPS_RUN_MIN_LEN: usize = 3;

/// Most chars a prefix may hold and still count as "just a list marker and emoji".
///
/// Covers indentation, a multi-digit marker and several emoji with their VS16 or ZWJ
/// joiners. It also keeps each check constant-time on lines with many caps runs.
const MARKER_PREFIX_MAX_CHARS: usize = 32;

/// Normalize `raw` so that list items, emoji headings and caps headings start their own line.
///
/// Lines that hold nothing but a decorative heading emoji are dropped.
pub fn preprocess(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let collapsed = collapse_duplicate_numbering(raw);

    let mut lines: Vec<String> = Vec::new();
    for line in collapsed.split('\n') {
        let listed = INLINE_LIST_MARKER.replace_all(line, "${1}\n${2}");
        for part in listed.split('\n') {
            let with_emoji = break_before_heading_emoji(part);
            for piece in with_emoji.split('\n') {
                let capped = break_before_caps_run(piece);
                lines.extend(
                    capped
                        .split('\n')
                        .filter(|l| !is_standalone_heading_emoji(l.trim()))
                        .map(str::to_string),
                );
            }
        }
    }
    lines.join("\n")
}

/// Strip a leading `N.` or bullet glyph, if present.
fn strip_list_marker(s: &str) -> &str {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0
        && let Some(rest) = s[digits..].strip_prefix('.')
    {
        return rest;
    }
    s.strip_prefix(['•', '-', '*']).unwrap_or(s)
}

/// True if `prefix` holds nothing but an optional list marker and emoji.
///
/// Breaking a line after such a prefix would orphan the marker from its text.
fn is_marker_only(prefix: &str) -> bool {
    if prefix.chars().nth(MARKER_PREFIX_MAX_CHARS).is_some() {
        return false;
    }
    let p = prefix.trim();
    if p.is_empty() {
        return true;
    }
    strip_list_marker(p)
        .chars()
        .all(|c| is_emoji_like(c) || c.is_whitespace())
}

/// Insert a line break before each heading emoji that introduces text.
fn break_before_heading_emoji(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 4);
    let mut line_start = 0;
    let mut i = 0;
    while i < line.len() {
        let rest = &line[i..];
        if let Some(n) = heading_emoji_prefix_len(rest) {
            let after = rest[n..].trim_start_matches([' ', '\t']);
            let introduces_text = after
                .chars()
                .next()
                .is_some_and(|c| !c.is_whitespace() && !is_emoji_like(c));
            let current = &out[line_start..];
            let follows_emoji = current
                .trim_end()
                .chars()
                .next_back()
                .is_some_and(is_emoji_like);
            if introduces_text && !follows_emoji && !is_marker_only(current) {
                let keep = out.trim_end_matches([' ', '\t']).len();
                out.truncate(keep);
                out.push('\n');
                line_start = out.len();
            }
            out.push_str(&rest[..n]);
            i += n;
            continue;
        }
        let Some(c) = rest.chars().next() else { break };
        out.push(c);
        i += c.len_utf8();
    }
    out
}

/// Insert a line break before an inline run of uppercase words.
fn break_before_caps_run(line: &str) -> String {
    CAPS_RUN
        .replace_all(line, |caps: &Captures| {
            let start = caps.get(0).map_or(0, |m| m.start());
            let run = &caps[1];
            if run.chars().count() > CAPS_RUN_MIN_LEN && !is_marker_only(&line[..start]) {
                format!("\n{}{}", run, &caps[2])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
