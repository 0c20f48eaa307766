//! Code span resolution.
//!
//! Code spans have the highest precedence: they are resolved first and
//! their payload is opaque to every later pass.

use memchr::memchr;

use crate::Range;

/// A resolved code span. `start..end` covers the backticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpan {
    pub start: u32,
    pub end: u32,
    /// Payload between the backticks.
    pub content: Range,
}

/// Resolve code spans left to right: each backtick pairs with the next one
/// on the line, provided at least one payload byte sits between them.
/// Unpaired backticks stay literal.
pub fn resolve_code_spans(text: &[u8], spans: &mut Vec<CodeSpan>) {
    spans.clear();
    let mut pos = 0;
    while pos < text.len() {
        let open = match memchr(b'`', &text[pos..]) {
            Some(i) => pos + i,
            None => break,
        };
        let close = match memchr(b'`', &text[open + 1..]) {
            Some(i) => open + 1 + i,
            None => break,
        };
        if close == open + 1 {
            // Empty pair: the first backtick stays literal, the second may
            // still open a span.
            pos = close;
            continue;
        }
        spans.push(CodeSpan {
            start: open as u32,
            end: close as u32 + 1,
            content: Range::from_usize(open + 1, close),
        });
        pos = close + 1;
    }
}
