//! Block classifier for the line-oriented Markdown subset.
//!
//! The classifier is line-oriented and handles:
//! - ATX headings
//! - Fenced code blocks
//! - Horizontal rules
//! - Ordered and unordered lists
//! - Paragraphs and blank-line separators

mod event;
mod parser;

pub use event::{BlockEvent, ListKind};
pub use parser::BlockParser;
