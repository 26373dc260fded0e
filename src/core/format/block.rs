//! Display blocks produced by the formatter.

use serde::Serialize;

/// Kind tag of a [`Block`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Paragraph,
    Heading,
    OrderedList,
    UnorderedList,
    Spacing,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paragraph => write!(f, "paragraph"),
            Self::Heading => write!(f, "heading"),
            Self::OrderedList => write!(f, "ordered-list"),
            Self::UnorderedList => write!(f, "unordered-list"),
            Self::Spacing => write!(f, "spacing"),
        }
    }
}

/// One structured unit of a formatted message.
///
/// Serializes as `{"kind": "...", "text": "..."}` for text blocks,
/// `{"kind": "...", "items": [...]}` for lists and `{"kind": "spacing"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Block {
    Paragraph { text: String },
    /// Heading text is kept verbatim, including a leading emoji.
    Heading { text: String },
    OrderedList { items: Vec<String> },
    UnorderedList { items: Vec<String> },
    Spacing,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Paragraph { .. } => BlockKind::Paragraph,
            Self::Heading { .. } => BlockKind::Heading,
            Self::OrderedList { .. } => BlockKind::OrderedList,
            Self::UnorderedList { .. } => BlockKind::UnorderedList,
            Self::Spacing => BlockKind::Spacing,
        }
    }

    /// Text of a paragraph or heading; None for lists and spacing.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Paragraph { text } | Self::Heading { text } => Some(text),
            _ => None,
        }
    }

    /// Items of an ordered or unordered list; None otherwise.
    pub fn items(&self) -> Option<&[String]> {
        match self {
            Self::OrderedList { items } | Self::UnorderedList { items } => Some(items),
            _ => None,
        }
    }

    /// Human-readable content of the block, list items joined by newlines.
    pub fn visible_text(&self) -> String {
        match self {
            Self::Paragraph { text } | Self::Heading { text } => text.clone(),
            Self::OrderedList { items } | Self::UnorderedList { items } => items.join("\n"),
            Self::Spacing => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Block::OrderedList {
            items: vec!["A".into(), "B".into()],
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"kind": "ordered-list", "items": ["A", "B"]}));
    }

    #[test]
    fn spacing_serializes_without_payload() {
        let json = serde_json::to_value(Block::Spacing).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "spacing"}));
    }

    #[test]
    fn accessors_match_variant() {
        let heading = Block::Heading {
            text: "TRIP".into(),
        };
        assert_eq!(heading.kind(), BlockKind::Heading);
        assert_eq!(heading.text(), Some("TRIP"));
        assert!(heading.items().is_none());

        let list = Block::UnorderedList {
            items: vec!["x".into(), "y".into()],
        };
        assert_eq!(list.items().map(|i| i.len()), Some(2));
        assert_eq!(list.visible_text(), "x\ny");
        assert_eq!(Block::Spacing.visible_text(), "");
    }

    #[test]
    fn kind_display_is_kebab_case() {
        assert_eq!(BlockKind::UnorderedList.to_string(), "unordered-list");
        assert_eq!(BlockKind::Spacing.to_string(), "spacing");
    }
}
