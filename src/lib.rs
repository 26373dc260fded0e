//! # concierge-format
//!
//! Turns free-text concierge chat responses into structured display blocks
//! (paragraphs, headings, ordered and unordered lists, spacing) and renders
//! them for a target UI.
//!
//! ```
//! use concierge_format::{Block, format_message};
//!
//! let blocks = format_message("1. 1. Book flights");
//! assert_eq!(
//!     blocks,
//!     vec![Block::OrderedList { items: vec!["Book flights".to_string()] }]
//! );
//! ```

pub mod core;

pub use crate::core::format::{Block, BlockKind, format_message};
pub use crate::core::render::{BlockKey, BlockRenderer, PlainRenderer, Rendered, render_blocks};
