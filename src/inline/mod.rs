//! Inline substituter for the line-oriented Markdown subset.
//!
//! Resolution runs as ordered precedence passes over one line's payload:
//! code spans first, then `**strong**`, then `*em*`, then links. Each pass
//! records the ranges it claimed so later passes skip them, which keeps the
//! precedence and non-nesting rules auditable pass by pass. The resolved
//! spans are always well-nested, so emission is a single recursive walk.

mod code_span;
mod emphasis;
pub mod event;
mod links;
mod protected;

pub use event::InlineEvent;

use crate::Range;
use code_span::{CodeSpan, resolve_code_spans};
use emphasis::{EmphasisSpan, resolve_emphasis, resolve_strong};
use links::{LinkSpan, resolve_links};

/// A resolved span in the unified emission order.
#[derive(Debug, Clone, Copy)]
struct Span {
    kind: SpanKind,
    start: u32,
    end: u32,
    /// Payload: code/emphasis content, or the link label.
    content: Range,
}

#[derive(Debug, Clone, Copy)]
enum SpanKind {
    Code,
    Strong,
    Emphasis,
    Link { url: Range },
}

/// Inline substituter state. Buffers are reused across lines.
pub struct InlineParser {
    code_spans: Vec<CodeSpan>,
    emphasis_spans: Vec<EmphasisSpan>,
    link_spans: Vec<LinkSpan>,
    /// Full ranges claimed by completed passes.
    protected: Vec<(u32, u32)>,
    spans: Vec<Span>,
}

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self {
            code_spans: Vec::new(),
            emphasis_spans: Vec::new(),
            link_spans: Vec::new(),
            protected: Vec::new(),
            spans: Vec::new(),
        }
    }

    /// Resolve the inline constructs of one payload and emit events.
    pub fn parse(&mut self, text: &[u8], events: &mut Vec<InlineEvent>) {
        if text.is_empty() {
            return;
        }

        self.protected.clear();
        self.emphasis_spans.clear();
        self.link_spans.clear();
        self.spans.clear();

        resolve_code_spans(text, &mut self.code_spans);
        self.protected
            .extend(self.code_spans.iter().map(|s| (s.start, s.end)));

        resolve_strong(text, &self.protected, &mut self.emphasis_spans);
        self.protected
            .extend(self.emphasis_spans.iter().map(|s| (s.start, s.end)));

        let em_from = self.emphasis_spans.len();
        resolve_emphasis(text, &self.protected, &mut self.emphasis_spans);
        self.protected
            .extend(self.emphasis_spans[em_from..].iter().map(|s| (s.start, s.end)));

        resolve_links(text, &self.protected, &mut self.link_spans);

        self.spans.extend(self.code_spans.iter().map(|s| Span {
            kind: SpanKind::Code,
            start: s.start,
            end: s.end,
            content: s.content,
        }));
        self.spans.extend(self.emphasis_spans.iter().map(|s| Span {
            kind: if s.strong {
                SpanKind::Strong
            } else {
                SpanKind::Emphasis
            },
            start: s.start,
            end: s.end,
            content: s.content,
        }));
        self.spans.extend(self.link_spans.iter().map(|s| Span {
            kind: SpanKind::Link { url: s.url },
            start: s.start,
            end: s.end,
            content: s.label,
        }));

        // Containers sort before the spans they contain.
        self.spans
            .sort_unstable_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut idx = 0;
        emit_range(&self.spans, 0, text.len() as u32, &mut idx, events);
    }
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit events for the spans inside `lo..hi`, recursing into container
/// payloads. Gaps between spans become plain text.
fn emit_range(spans: &[Span], lo: u32, hi: u32, idx: &mut usize, events: &mut Vec<InlineEvent>) {
    let mut pos = lo;
    while *idx < spans.len() && spans[*idx].start < hi {
        let span = spans[*idx];
        *idx += 1;
        debug_assert!(span.start >= pos);
        if span.start > pos {
            events.push(InlineEvent::Text(Range::new(pos, span.start)));
        }
        match span.kind {
            SpanKind::Code => events.push(InlineEvent::Code(span.content)),
            SpanKind::Strong => {
                events.push(InlineEvent::StrongStart);
                emit_range(spans, span.content.start, span.content.end, idx, events);
                events.push(InlineEvent::StrongEnd);
            }
            SpanKind::Emphasis => {
                events.push(InlineEvent::EmphasisStart);
                emit_range(spans, span.content.start, span.content.end, idx, events);
                events.push(InlineEvent::EmphasisEnd);
            }
            SpanKind::Link { url } => {
                events.push(InlineEvent::LinkStart { url });
                emit_range(spans, span.content.start, span.content.end, idx, events);
                events.push(InlineEvent::LinkEnd);
            }
        }
        pos = span.end;
    }
    if pos < hi {
        events.push(InlineEvent::Text(Range::new(pos, hi)));
    }
}
