//! Plain-text rendering for terminals and pipes.

use super::wrap::{wrap_text, wrap_with_prefix};
use super::{BlockRenderer, render_blocks};
use crate::core::format::Block;

const BULLET: &str = "• ";

/// Renders each block as wrapped lines of plain text.
#[derive(Debug, Clone, Copy)]
pub struct PlainRenderer {
    /// Wrap width in columns; 0 disables wrapping.
    pub width: usize,
}

impl PlainRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl BlockRenderer for PlainRenderer {
    type Element = Vec<String>;

    fn render_block(&self, block: &Block) -> Vec<String> {
        match block {
            Block::Paragraph { text } | Block::Heading { text } => wrap_text(text, self.width),
            Block::OrderedList { items } => items
                .iter()
                .enumerate()
                .flat_map(|(i, item)| wrap_with_prefix(item, &format!("{}. ", i + 1), self.width))
                .collect(),
            Block::UnorderedList { items } => items
                .iter()
                .flat_map(|item| wrap_with_prefix(item, BULLET, self.width))
                .collect(),
            Block::Spacing => vec![String::new()],
        }
    }
}

/// Render blocks to a single string, one output line per rendered line.
pub fn render_plain(blocks: &[Block], width: usize) -> String {
    render_blocks(&PlainRenderer::new(width), blocks)
        .into_iter()
        .flat_map(|r| r.element)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::format_message;

    #[test]
    fn lists_are_renumbered_and_bulleted() {
        let blocks = format_message("3. Fly\n7. Stay\n- Spa");
        assert_eq!(render_plain(&blocks, 80), "1. Fly\n2. Stay\n• Spa");
    }

    #[test]
    fn spacing_is_an_empty_line() {
        let blocks = format_message("One.\n\nTwo.");
        assert_eq!(render_plain(&blocks, 80), "One.\n\nTwo.");
    }

    #[test]
    fn headings_are_verbatim() {
        let blocks = format_message("📋 Trip Summary\nDetails follow.");
        assert_eq!(render_plain(&blocks, 80), "📋 Trip Summary\nDetails follow.");
    }

    #[test]
    fn long_items_wrap_under_their_text() {
        let blocks = vec![Block::OrderedList {
            items: vec!["Check in at the front desk".into()],
        }];
        let rendered = PlainRenderer::new(14).render_block(&blocks[0]);
        assert_eq!(rendered, ["1. Check in at", "   the front", "   desk"]);
    }

    #[test]
    fn empty_blocks_render_empty_string() {
        assert_eq!(render_plain(&[], 80), "");
    }
}
