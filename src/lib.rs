//! linemark: line-oriented Markdown to HTML fragment converter
//!
//! This crate converts a constrained Markdown subset (headings, paragraphs,
//! lists, fenced code blocks, horizontal rules, and bold/italic/code/link
//! inline markup) into an HTML fragment with no document wrapper tags.
//!
//! # Design Principles
//! - Line-oriented: the block classifier decides one line at a time,
//!   keeping a single "currently open block" state
//! - No regex: pure byte-level scanning
//! - Minimal allocations: events carry ranges into the input buffer
//! - Infallible core: malformed markup degrades to literal text, and an
//!   unterminated code fence is closed implicitly at end of input

pub mod block;
pub mod cursor;
pub mod escape;
pub mod inline;
pub mod range;
pub mod render;

// Re-export primary types
pub use block::{BlockEvent, BlockParser, ListKind};
pub use inline::{InlineEvent, InlineParser};
pub use range::Range;
pub use render::HtmlWriter;

/// Convert Markdown to an HTML fragment.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = linemark::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input.as_bytes(), &mut writer);
    writer.into_string()
}

/// Convert Markdown to an HTML fragment, writing into a provided buffer.
///
/// This avoids allocation if the buffer has sufficient capacity.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::new();
    std::mem::swap(writer.buffer_mut(), out);
    render_to_writer(input.as_bytes(), &mut writer);
    std::mem::swap(writer.buffer_mut(), out);
}

/// State for collecting paragraph content before inline substitution.
///
/// Consecutive paragraph lines are joined with a single space and rewritten
/// as one unit, so inline markup sees the assembled sentence.
struct ParagraphState {
    content: Vec<u8>,
    in_paragraph: bool,
}

impl ParagraphState {
    fn new() -> Self {
        Self {
            content: Vec::with_capacity(256),
            in_paragraph: false,
        }
    }

    fn start(&mut self) {
        self.in_paragraph = true;
        self.content.clear();
    }

    fn add_text(&mut self, text: &[u8]) {
        self.content.extend_from_slice(text);
    }

    fn add_join(&mut self) {
        self.content.push(b' ');
    }

    fn finish(&mut self) -> &[u8] {
        self.in_paragraph = false;
        while self
            .content
            .last()
            .is_some_and(|&b| b == b' ' || b == b'\t')
        {
            self.content.pop();
        }
        &self.content
    }
}

/// Render Markdown to an HtmlWriter.
fn render_to_writer(input: &[u8], writer: &mut HtmlWriter) {
    let mut parser = BlockParser::new(input);
    let mut events = Vec::with_capacity((input.len() / 16).max(64));
    parser.parse(&mut events);

    let mut inline_parser = InlineParser::new();
    let mut inline_events = Vec::with_capacity(16);
    let mut para_state = ParagraphState::new();

    for event in &events {
        render_block_event(
            input,
            event,
            writer,
            &mut inline_parser,
            &mut inline_events,
            &mut para_state,
        );
    }
}

/// Render a single block event to HTML.
fn render_block_event(
    input: &[u8],
    event: &BlockEvent,
    writer: &mut HtmlWriter,
    inline_parser: &mut InlineParser,
    inline_events: &mut Vec<InlineEvent>,
    para_state: &mut ParagraphState,
) {
    match event {
        BlockEvent::ParagraphStart => {
            writer.paragraph_start();
            para_state.start();
        }
        BlockEvent::ParagraphEnd => {
            let content = para_state.finish();
            if !content.is_empty() {
                inline_events.clear();
                inline_parser.parse(content, inline_events);
                for inline_event in inline_events.iter() {
                    render_inline_event(content, inline_event, writer);
                }
            }
            writer.paragraph_end();
        }
        BlockEvent::SoftBreak => {
            para_state.add_join();
        }
        BlockEvent::Text(range) => {
            let text = range.slice(input);
            if para_state.in_paragraph {
                // Accumulate until the paragraph closes
                para_state.add_text(text);
            } else {
                // Heading or list item payload: substitute immediately
                inline_events.clear();
                inline_parser.parse(text, inline_events);
                for inline_event in inline_events.iter() {
                    render_inline_event(text, inline_event, writer);
                }
            }
        }
        BlockEvent::HeadingStart { level } => {
            writer.heading_start(*level);
        }
        BlockEvent::HeadingEnd { level } => {
            writer.heading_end(*level);
        }
        BlockEvent::HorizontalRule => {
            writer.horizontal_rule();
        }
        BlockEvent::CodeBlockStart => {
            writer.code_block_start();
        }
        BlockEvent::Code(range) => {
            // Code block content - verbatim, no inline substitution
            writer.write_escaped_text(range.slice(input));
            writer.newline();
        }
        BlockEvent::CodeBlockEnd => {
            writer.code_block_end();
        }
        BlockEvent::ListStart { kind } => match kind {
            ListKind::Unordered => writer.ul_start(),
            ListKind::Ordered => writer.ol_start(),
        },
        BlockEvent::ListEnd { kind } => match kind {
            ListKind::Unordered => writer.ul_end(),
            ListKind::Ordered => writer.ol_end(),
        },
        BlockEvent::ListItemStart => {
            writer.li_start();
        }
        BlockEvent::ListItemEnd => {
            writer.li_end();
        }
    }
}

/// Render a single inline event to HTML.
fn render_inline_event(text: &[u8], event: &InlineEvent, writer: &mut HtmlWriter) {
    match event {
        InlineEvent::Text(range) => {
            writer.write_escaped_text(range.slice(text));
        }
        InlineEvent::Code(range) => {
            writer.inline_code(range.slice(text));
        }
        InlineEvent::StrongStart => writer.strong_start(),
        InlineEvent::StrongEnd => writer.strong_end(),
        InlineEvent::EmphasisStart => writer.em_start(),
        InlineEvent::EmphasisEnd => writer.em_end(),
        InlineEvent::LinkStart { url } => {
            writer.link_start(url.slice(text));
        }
        InlineEvent::LinkEnd => writer.link_end(),
    }
}
