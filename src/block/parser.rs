//! Block classifier implementation.
//!
//! Walks the document line by line with a single piece of state, the
//! currently open block, and decides per line: continue the open block,
//! close it and open another, or emit a self-contained block.

use memchr::memchr;

use crate::Range;
use crate::cursor::Cursor;

use super::event::{BlockEvent, ListKind};

/// The block construct the classifier is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenBlock {
    None,
    Paragraph,
    List(ListKind),
    CodeBlock,
}

/// Block classifier state.
pub struct BlockParser<'a> {
    /// Input bytes.
    input: &'a [u8],
    /// Offset of the next unconsumed line.
    pos: usize,
    /// The currently open block.
    open: OpenBlock,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            open: OpenBlock::None,
        }
    }

    /// Parse the whole document and collect events.
    ///
    /// An unterminated code fence is closed implicitly at end of input, so
    /// the event stream never leaves a block open.
    pub fn parse(&mut self, events: &mut Vec<BlockEvent>) {
        while let Some(line) = self.next_line() {
            self.classify_line(line, events);
        }
        self.close_open_block(events);
    }

    /// Take the next line as an absolute range. The trailing newline (and a
    /// CR before it) is excluded.
    fn next_line(&mut self) -> Option<Range> {
        if self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;
        let mut end = match memchr(b'\n', &self.input[start..]) {
            Some(i) => {
                self.pos = start + i + 1;
                start + i
            }
            None => {
                self.pos = self.input.len();
                self.input.len()
            }
        };
        if end > start && self.input[end - 1] == b'\r' {
            end -= 1;
        }
        Some(Range::from_usize(start, end))
    }

    /// The decision table: one arm per line pattern, first match wins.
    fn classify_line(&mut self, line: Range, events: &mut Vec<BlockEvent>) {
        let text = line.slice(self.input);

        // Fence lines toggle the code block state and emit no content.
        if is_fence(text) {
            if self.open == OpenBlock::CodeBlock {
                events.push(BlockEvent::CodeBlockEnd);
                self.open = OpenBlock::None;
            } else {
                self.close_open_block(events);
                events.push(BlockEvent::CodeBlockStart);
                self.open = OpenBlock::CodeBlock;
            }
            return;
        }

        // Inside a fence, every line passes through verbatim.
        if self.open == OpenBlock::CodeBlock {
            events.push(BlockEvent::Code(line));
            return;
        }

        // Blank line: closes the open block, emits nothing itself.
        if is_blank(text) {
            self.close_open_block(events);
            return;
        }

        // Headings are single-line, self-closing blocks.
        if let Some((level, content)) = heading(text) {
            self.close_open_block(events);
            events.push(BlockEvent::HeadingStart { level });
            let content = abs_range(line, content);
            if !content.is_empty() {
                events.push(BlockEvent::Text(content));
            }
            events.push(BlockEvent::HeadingEnd { level });
            return;
        }

        if is_rule(text) {
            self.close_open_block(events);
            events.push(BlockEvent::HorizontalRule);
            return;
        }

        if let Some(content) = unordered_item(text) {
            self.list_item(ListKind::Unordered, line, content, events);
            return;
        }

        if let Some(content) = ordered_item(text) {
            self.list_item(ListKind::Ordered, line, content, events);
            return;
        }

        // Anything else is a paragraph line. A non-list line closes an open
        // list before the paragraph starts.
        let content = abs_range(line, trimmed(text, 0, text.len()));
        if self.open == OpenBlock::Paragraph {
            events.push(BlockEvent::SoftBreak);
        } else {
            self.close_open_block(events);
            events.push(BlockEvent::ParagraphStart);
            self.open = OpenBlock::Paragraph;
        }
        events.push(BlockEvent::Text(content));
    }

    /// Emit a list item, opening or switching the surrounding list first.
    fn list_item(
        &mut self,
        kind: ListKind,
        line: Range,
        content: (usize, usize),
        events: &mut Vec<BlockEvent>,
    ) {
        match self.open {
            OpenBlock::List(open_kind) if open_kind == kind => {}
            _ => {
                // A kind change closes the old list before opening the new one.
                self.close_open_block(events);
                events.push(BlockEvent::ListStart { kind });
                self.open = OpenBlock::List(kind);
            }
        }
        events.push(BlockEvent::ListItemStart);
        let content = abs_range(line, content);
        if !content.is_empty() {
            events.push(BlockEvent::Text(content));
        }
        events.push(BlockEvent::ListItemEnd);
    }

    /// Close whatever block is open, emitting its closing event.
    fn close_open_block(&mut self, events: &mut Vec<BlockEvent>) {
        match self.open {
            OpenBlock::None => {}
            OpenBlock::Paragraph => events.push(BlockEvent::ParagraphEnd),
            OpenBlock::List(kind) => events.push(BlockEvent::ListEnd { kind }),
            OpenBlock::CodeBlock => events.push(BlockEvent::CodeBlockEnd),
        }
        self.open = OpenBlock::None;
    }
}

/// Convert a line-relative (start, end) pair to an absolute range.
#[inline]
fn abs_range(line: Range, (start, end): (usize, usize)) -> Range {
    Range::from_usize(line.start_usize() + start, line.start_usize() + end)
}

/// Trim spaces and tabs from both ends of `text[start..end]`.
fn trimmed(text: &[u8], mut start: usize, mut end: usize) -> (usize, usize) {
    while start < end && matches!(text[start], b' ' | b'\t') {
        start += 1;
    }
    while end > start && matches!(text[end - 1], b' ' | b'\t') {
        end -= 1;
    }
    (start, end)
}

/// Check if a line is entirely whitespace.
fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|&b| matches!(b, b' ' | b'\t'))
}

/// Check if a line opens or closes a code fence: optional leading
/// whitespace, then at least three backticks.
fn is_fence(line: &[u8]) -> bool {
    let (start, end) = trimmed(line, 0, line.len());
    line[start..end].starts_with(b"```")
}

/// Probe for an ATX heading: one to six `#` at column 0 followed by
/// whitespace. Returns the level and the trimmed content range.
fn heading(line: &[u8]) -> Option<(u8, (usize, usize))> {
    let mut cursor = Cursor::new(line);
    let level = cursor.count_run(b'#');
    if level == 0 || level > 6 {
        return None;
    }
    if cursor.skip_whitespace() == 0 {
        return None;
    }
    Some((level as u8, trimmed(line, cursor.offset(), line.len())))
}

/// Check for a horizontal rule: a homogeneous run of three or more `-`,
/// `*`, or `_` with nothing else on the line.
fn is_rule(line: &[u8]) -> bool {
    let (start, end) = trimmed(line, 0, line.len());
    let body = &line[start..end];
    if body.len() < 3 {
        return false;
    }
    matches!(body[0], b'-' | b'*' | b'_') && body.iter().all(|&b| b == body[0])
}

/// Probe for an unordered list item: `- ` or `* ` after optional leading
/// whitespace. Returns the trimmed content range.
fn unordered_item(line: &[u8]) -> Option<(usize, usize)> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();
    if !(cursor.eat(b'-') || cursor.eat(b'*')) {
        return None;
    }
    if cursor.skip_whitespace() == 0 {
        return None;
    }
    Some(trimmed(line, cursor.offset(), line.len()))
}

/// Probe for an ordered list item: digits, `.`, whitespace. Returns the
/// trimmed content range.
fn ordered_item(line: &[u8]) -> Option<(usize, usize)> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();
    if cursor.skip_digits() == 0 {
        return None;
    }
    if !cursor.eat(b'.') {
        return None;
    }
    if cursor.skip_whitespace() == 0 {
        return None;
    }
    Some(trimmed(line, cursor.offset(), line.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<BlockEvent> {
        let mut parser = BlockParser::new(input.as_bytes());
        let mut events = Vec::new();
        parser.parse(&mut events);
        events
    }

    fn text_of(input: &str, event: &BlockEvent) -> String {
        match event {
            BlockEvent::Text(r) | BlockEvent::Code(r) => {
                String::from_utf8(r.slice(input.as_bytes()).to_vec()).unwrap()
            }
            other => panic!("expected text event, got {other:?}"),
        }
    }

    #[test]
    fn test_heading_events() {
        let input = "## Title";
        let events = parse(input);
        assert_eq!(events[0], BlockEvent::HeadingStart { level: 2 });
        assert_eq!(text_of(input, &events[1]), "Title");
        assert_eq!(events[2], BlockEvent::HeadingEnd { level: 2 });
    }

    #[test]
    fn test_seven_hashes_is_paragraph() {
        let events = parse("####### deep");
        assert_eq!(events[0], BlockEvent::ParagraphStart);
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        let events = parse("#nospace");
        assert_eq!(events[0], BlockEvent::ParagraphStart);
    }

    #[test]
    fn test_list_grouping() {
        let events = parse("- a\n- b\n- c");
        let starts = events
            .iter()
            .filter(|e| matches!(e, BlockEvent::ListStart { .. }))
            .count();
        let items = events
            .iter()
            .filter(|e| matches!(e, BlockEvent::ListItemStart))
            .count();
        assert_eq!(starts, 1);
        assert_eq!(items, 3);
        assert_eq!(
            events.last(),
            Some(&BlockEvent::ListEnd {
                kind: ListKind::Unordered
            })
        );
    }

    #[test]
    fn test_list_kind_change() {
        let events = parse("- a\n1. b");
        let expected_closure = events
            .iter()
            .position(|e| {
                matches!(
                    e,
                    BlockEvent::ListEnd {
                        kind: ListKind::Unordered
                    }
                )
            })
            .unwrap();
        let reopened = events
            .iter()
            .position(|e| {
                matches!(
                    e,
                    BlockEvent::ListStart {
                        kind: ListKind::Ordered
                    }
                )
            })
            .unwrap();
        assert!(expected_closure < reopened);
    }

    #[test]
    fn test_paragraph_closes_list() {
        let events = parse("- a\ntext");
        let closed = events
            .iter()
            .position(|e| matches!(e, BlockEvent::ListEnd { .. }))
            .unwrap();
        let para = events
            .iter()
            .position(|e| matches!(e, BlockEvent::ParagraphStart))
            .unwrap();
        assert!(closed < para);
    }

    #[test]
    fn test_paragraph_continuation_soft_break() {
        let events = parse("one\ntwo");
        assert!(events.contains(&BlockEvent::SoftBreak));
        let ends = events
            .iter()
            .filter(|e| matches!(e, BlockEvent::ParagraphEnd))
            .count();
        assert_eq!(ends, 1);
    }

    #[test]
    fn test_fence_toggles() {
        let input = "```\ncode line\n```";
        let events = parse(input);
        assert_eq!(events[0], BlockEvent::CodeBlockStart);
        assert_eq!(text_of(input, &events[1]), "code line");
        assert_eq!(events[2], BlockEvent::CodeBlockEnd);
    }

    #[test]
    fn test_unterminated_fence_closed_at_eof() {
        let events = parse("```\ncode");
        assert_eq!(events.last(), Some(&BlockEvent::CodeBlockEnd));
    }

    #[test]
    fn test_fence_info_string_ignored() {
        let input = "```rust\nfn main() {}\n```";
        let events = parse(input);
        assert_eq!(events[0], BlockEvent::CodeBlockStart);
        assert_eq!(text_of(input, &events[1]), "fn main() {}");
    }

    #[test]
    fn test_code_lines_not_classified() {
        let input = "```\n# not a heading\n- not a list\n```";
        let events = parse(input);
        assert!(
            events
                .iter()
                .all(|e| !matches!(e, BlockEvent::HeadingStart { .. }))
        );
        assert!(events.iter().all(|e| !matches!(e, BlockEvent::ListStart { .. })));
    }

    #[test]
    fn test_rule_variants() {
        for input in ["---", "***", "___", "----------", "  ---  "] {
            let events = parse(input);
            assert_eq!(events, vec![BlockEvent::HorizontalRule], "input: {input}");
        }
    }

    #[test]
    fn test_mixed_rule_chars_is_not_rule() {
        let events = parse("-*-");
        assert_eq!(events[0], BlockEvent::ParagraphStart);
    }

    #[test]
    fn test_blank_closes_paragraph() {
        let events = parse("one\n\ntwo");
        let ends = events
            .iter()
            .filter(|e| matches!(e, BlockEvent::ParagraphEnd))
            .count();
        assert_eq!(ends, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n \t ").is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let input = "# Title\r\nbody\r\n";
        let events = parse(input);
        assert_eq!(text_of(input, &events[1]), "Title");
    }

    #[test]
    fn test_heading_closes_paragraph() {
        let events = parse("text\n# H");
        let end = events
            .iter()
            .position(|e| matches!(e, BlockEvent::ParagraphEnd))
            .unwrap();
        let heading = events
            .iter()
            .position(|e| matches!(e, BlockEvent::HeadingStart { .. }))
            .unwrap();
        assert!(end < heading);
    }
}
