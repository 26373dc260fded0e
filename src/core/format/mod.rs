//! Message formatter: turns a free-text chat response into display blocks.
//!
//! The pipeline is `preprocess` (one element per line), then `BlockBuilder`
//! (classify each line and group contiguous list items).

mod block;
mod builder;
mod classify;
mod emoji;
mod numbering;
mod preprocess;

pub use block::{Block, BlockKind};
pub use builder::{BlockBuilder, ListState};
pub use classify::{LineKind, classify_line, clean_line};
pub use emoji::is_heading_emoji;
pub use numbering::collapse_duplicate_numbering;
pub use preprocess::preprocess;

/// Format a raw chat response into display blocks.
///
/// Never fails: empty input gives no blocks, anything else gives at most one
/// block per line of the preprocessed text.
pub fn format_message(content: &str) -> Vec<Block> {
    let normalized = preprocess(content);
    if normalized.is_empty() {
        return Vec::new();
    }
    let mut builder = BlockBuilder::new();
    let mut line_count = 0;
    for line in normalized.split('\n') {
        builder.push_line(line);
        line_count += 1;
    }
    let blocks = builder.finish();
    log::debug!(
        "Formatted {} bytes into {} lines, {} blocks",
        content.len(),
        line_count,
        blocks.len()
    );
    blocks
}
