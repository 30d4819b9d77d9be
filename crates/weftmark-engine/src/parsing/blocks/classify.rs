use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{BlockQuote, CodeFence, FenceSig};

/// Local facts about a single line, gathered without looking at its neighbours.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line, terminator included.
    pub line: Span,
    /// Whether nothing but whitespace follows the quote prefixes.
    pub is_blank: bool,
    pub quote_depth: u8,
    /// Span of the content after quote prefixes, terminator excluded.
    pub remainder_span: Span,
    pub fence_sig: Option<FenceSig>,
}

pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.trimmed();
        let (quote_depth, idx) = BlockQuote::strip_prefixes(trimmed);
        let remainder = &trimmed[idx..];

        LineClass {
            line: lr.span,
            is_blank: remainder.trim().is_empty(),
            quote_depth,
            remainder_span: Span::new(lr.span.start + idx, lr.span.start + trimmed.len()),
            fence_sig: CodeFence::sig(remainder),
        }
    }
}
