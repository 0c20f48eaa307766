//! Block-level event types.

use crate::Range;

/// Events emitted by the block classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
    /// Start of a paragraph.
    ParagraphStart,
    /// End of a paragraph.
    ParagraphEnd,

    /// Start of a heading.
    HeadingStart {
        /// Heading level (1-6).
        level: u8,
    },
    /// End of a heading.
    HeadingEnd {
        /// Heading level (1-6).
        level: u8,
    },

    /// Start of a fenced code block.
    CodeBlockStart,
    /// End of a fenced code block.
    CodeBlockEnd,

    /// Start of a list.
    ListStart {
        /// List type (ordered or unordered).
        kind: ListKind,
    },
    /// End of a list.
    ListEnd {
        /// List type (ordered or unordered).
        kind: ListKind,
    },

    /// Start of a list item.
    ListItemStart,
    /// End of a list item.
    ListItemEnd,

    /// A horizontal rule.
    HorizontalRule,

    /// Line break within a paragraph (continuation lines join with a space).
    SoftBreak,

    /// Inline content range to be run through the inline substituter.
    Text(Range),

    /// Raw code line (not inline-parsed).
    Code(Range),
}

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Unordered list (`- ` or `* ` bullets).
    Unordered,
    /// Ordered list (`1. ` markers).
    Ordered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_size() {
        // Events carry at most a Range payload
        assert!(std::mem::size_of::<BlockEvent>() <= 16);
    }

    #[test]
    fn test_list_kind() {
        assert_ne!(ListKind::Unordered, ListKind::Ordered);
    }
}
