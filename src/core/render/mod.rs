//! Presentation binding: maps formatted blocks to renderable elements.
//!
//! Each element is keyed by the index of its block, so a view can reconcile
//! re-renders of the same message without generating identifiers.

mod plain;
mod wrap;

use serde::Serialize;

use crate::core::format::Block;

pub use plain::{PlainRenderer, render_plain};
pub use wrap::{wrap_text, wrap_with_prefix};

/// Stable identity of a rendered block: its position in the block sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BlockKey(pub usize);

impl std::fmt::Display for BlockKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "block-{}", self.0)
    }
}

/// A rendered element together with the key of the block it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered<T> {
    pub key: BlockKey,
    pub element: T,
}

/// Maps one block to one element of a target UI (plain text, terminal lines, ...).
pub trait BlockRenderer {
    type Element;

    fn render_block(&self, block: &Block) -> Self::Element;
}

/// Render every block in order, keying each element by block index.
pub fn render_blocks<R>(renderer: &R, blocks: &[Block]) -> Vec<Rendered<R::Element>>
where
    R: BlockRenderer + ?Sized,
{
    blocks
        .iter()
        .enumerate()
        .map(|(i, block)| Rendered {
            key: BlockKey(i),
            element: renderer.render_block(block),
        })
        .collect()
}
