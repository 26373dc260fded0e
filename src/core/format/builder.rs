//! Streams classified lines into blocks, grouping contiguous list items.

use super::block::Block;
use super::classify::{LineKind, clean_line, strip_bullet, strip_number};

/// Which list, if any, is currently accumulating items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    None,
    InOrderedList,
    InUnorderedList,
}

/// Line-by-line block builder. Call [`BlockBuilder::finish`] to flush the open list.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    blocks: Vec<Block>,
    state: ListState,
    items: Vec<String>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    /// Feed one line of preprocessed text.
    pub fn push_line(&mut self, line: &str) {
        let cleaned = clean_line(line);
        match LineKind::of(&cleaned) {
            LineKind::Blank => {
                self.close_list();
                self.blocks.push(Block::Spacing);
            }
            LineKind::Numbered => {
                self.push_item(ListState::InOrderedList, strip_number(&cleaned));
            }
            LineKind::Bullet => {
                self.push_item(ListState::InUnorderedList, strip_bullet(&cleaned));
            }
            LineKind::Heading => {
                self.close_list();
                self.blocks.push(Block::Heading { text: cleaned });
            }
            LineKind::Paragraph => {
                self.close_list();
                self.blocks.push(Block::Paragraph { text: cleaned });
            }
        }
    }

    /// Flush any open list and return the blocks in document order.
    pub fn finish(mut self) -> Vec<Block> {
        self.close_list();
        self.blocks
    }

    fn push_item(&mut self, list: ListState, item: &str) {
        if self.state != list {
            self.close_list();
            self.state = list;
        }
        self.items.push(item.to_string());
    }

    fn close_list(&mut self) {
        let items = std::mem::take(&mut self.items);
        match self.state {
            ListState::InOrderedList => self.blocks.push(Block::OrderedList { items }),
            ListState::InUnorderedList => self.blocks.push(Block::UnorderedList { items }),
            ListState::None => {}
        }
        self.state = ListState::None;
    }
}
