//! Terminal rendering of formatted blocks as styled ratatui lines.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use concierge_format::core::format::Block;
use concierge_format::core::render::{BlockRenderer, wrap_text, wrap_with_prefix};

use super::constants::{ACCENT, ACCENT_SECONDARY};

const BULLET: &str = "• ";

/// Renders blocks as wrapped, styled lines for the message pane.
pub(crate) struct StyledRenderer {
    width: usize,
}

impl StyledRenderer {
    pub(crate) fn new(width: usize) -> Self {
        Self { width }
    }

    /// Wrap an item behind `marker`; the marker is styled, continuation lines are indented.
    fn list_item(&self, marker: &str, item: &str) -> Vec<Line<'static>> {
        let marker_style = Style::default().fg(ACCENT_SECONDARY);
        wrap_with_prefix(item, marker, self.width)
            .into_iter()
            .enumerate()
            .map(|(i, line)| match line.strip_prefix(marker.trim_end()) {
                Some(rest) if i == 0 => Line::from(vec![
                    Span::styled(marker.trim_end().to_string(), marker_style),
                    Span::raw(rest.to_string()),
                ]),
                _ => Line::from(line),
            })
            .collect()
    }
}

impl BlockRenderer for StyledRenderer {
    type Element = Vec<Line<'static>>;

    fn render_block(&self, block: &Block) -> Vec<Line<'static>> {
        match block {
            Block::Paragraph { text } => wrap_text(text, self.width)
                .into_iter()
                .map(Line::from)
                .collect(),
            Block::Heading { text } => {
                let style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
                wrap_text(text, self.width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, style)))
                    .collect()
            }
            Block::OrderedList { items } => items
                .iter()
                .enumerate()
                .flat_map(|(i, item)| self.list_item(&format!("{}. ", i + 1), item))
                .collect(),
            Block::UnorderedList { items } => items
                .iter()
                .flat_map(|item| self.list_item(BULLET, item))
                .collect(),
            Block::Spacing => vec![Line::default()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_format::core::render::render_blocks;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn heading_is_bold_accent() {
        let lines = StyledRenderer::new(80).render_block(&Block::Heading {
            text: "📋 Trip Summary".into(),
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(text_of(&lines[0]), "📋 Trip Summary");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn list_markers_are_separate_spans() {
        let lines = StyledRenderer::new(80).render_block(&Block::OrderedList {
            items: vec!["Fly".into(), "Stay".into()],
        });
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content.as_ref(), "1.");
        assert_eq!(lines[0].spans[0].style.fg, Some(ACCENT_SECONDARY));
        assert_eq!(text_of(&lines[1]), "2. Stay");
    }

    #[test]
    fn wrapped_item_continues_unstyled() {
        let lines = StyledRenderer::new(10).render_block(&Block::UnorderedList {
            items: vec!["pack light bags".into()],
        });
        let texts: Vec<String> = lines.iter().map(text_of).collect();
        assert_eq!(texts, ["• pack", "  light", "  bags"]);
        assert_eq!(lines[1].spans.len(), 1);
    }

    #[test]
    fn spacing_is_one_empty_line() {
        let rendered = render_blocks(&StyledRenderer::new(40), &[Block::Spacing]);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].element.len(), 1);
        assert!(rendered[0].element[0].spans.is_empty());
    }
}
