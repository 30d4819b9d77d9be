use crate::{parsing::excerpt::Excerpt, parsing::rope::span::Span, state::State};

use super::{
    kinds::{Code, HardBreak, Markup, PlainText, UrlTag},
    types::{Inline, InlineNode, ParsedInline},
};

/// Parses an inline run into a sequence of [`ParsedInline`]s.
///
/// # Arguments
/// - `base`: Offset added to every reported span
/// - `s`: The inline content (typically a paragraph's joined lines)
/// - `state`: The state known so far; variants may not base grammar
///   decisions on anything that is only final after scanning
///
/// # Precedence
/// At each cursor position the variants are tried in a fixed order and the
/// first match wins: `Code`, `HardBreak`, `UrlTag`, `Markup`. Code spans go
/// first so nothing inside them is recognized. Bytes no variant claims are
/// gathered into `PlainText` nodes.
///
/// # Panics
/// If a variant reports a zero width, or a begin position outside the text
/// not yet claimed, since either would corrupt cursor advancement.
pub fn parse_inline(base: usize, s: &str, state: &State) -> Vec<ParsedInline> {
    let mut excerpt = Excerpt::new(s, base);
    let mut out = vec![];
    let mut text_start = 0usize;

    // Emits the pending unclaimed run `s[start..end]` as a PlainText node
    fn flush_text(out: &mut Vec<ParsedInline>, s: &str, base: usize, start: usize, end: usize) {
        if end > start {
            out.push(ParsedInline {
                span: Span::new(base + start, base + end),
                node: PlainText::new(&s[start..end]).into(),
            });
        }
    }

    while !excerpt.is_empty() {
        let Some(node) = try_variants(&excerpt, state) else {
            let step = excerpt.text().chars().next().map_or(1, char::len_utf8);
            excerpt = excerpt.adding_to_offset(step);
            continue;
        };

        let width = node.width();
        assert!(
            width > 0,
            "inline {} matched zero bytes at offset {}",
            node.kind_name(),
            excerpt.position()
        );

        let begin = node.begin_position().unwrap_or(excerpt.position());
        assert!(
            begin >= base + text_start && begin <= excerpt.position(),
            "inline {} begins at {begin}, outside unclaimed text {}..{}",
            node.kind_name(),
            base + text_start,
            excerpt.position()
        );

        let begin_local = begin - base;
        let end_local = begin_local + width;
        assert!(
            end_local > excerpt.offset(),
            "inline {} ends at {} without passing the cursor at {}",
            node.kind_name(),
            base + end_local,
            excerpt.position()
        );

        flush_text(&mut out, s, base, text_start, begin_local);
        log::trace!(
            "inline {} at {}..{}",
            node.kind_name(),
            begin,
            base + end_local
        );
        out.push(ParsedInline {
            span: Span::new(begin, base + end_local),
            node,
        });

        excerpt = excerpt.adding_to_offset(end_local - excerpt.offset());
        text_start = end_local;
    }

    flush_text(&mut out, s, base, text_start, s.len());
    out
}

fn try_variants(excerpt: &Excerpt<'_>, state: &State) -> Option<InlineNode> {
    Code::build(excerpt, state)
        .map(InlineNode::from)
        .or_else(|| HardBreak::build(excerpt, state).map(InlineNode::from))
        .or_else(|| UrlTag::build(excerpt, state).map(InlineNode::from))
        .or_else(|| Markup::build(excerpt, state).map(InlineNode::from))
}
