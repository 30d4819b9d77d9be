//! # Parsing
//!
//! The scan phase: blocks first, then inline runs inside paragraphs.
//!
//! ## Modules
//!
//! - **`rope`**: byte spans, line iteration and slicing over the document rope
//! - **`blocks`**: line classification and block construction
//! - **`excerpt`**: the cursor view offered to inline variants
//! - **`inline`**: the inline contract, its variants, and the dispatcher

pub mod blocks;
pub mod excerpt;
pub mod inline;
pub mod rope;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier};
use rope::{Span, lines_with_spans, slice::slice_to_string};

use crate::state::State;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// A paragraph's joined text and where each of its lines came from.
struct ParagraphText {
    text: String,
    /// `(offset in text, document offset)` of each line's first content byte.
    line_starts: Vec<(usize, usize)>,
}

impl ParagraphText {
    fn new(rope: &Rope, b: &BlockNode) -> Self {
        let mut text = String::new();
        let mut line_starts = Vec::with_capacity(b.lines.len());

        for (i, sp) in b.lines.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            let raw = slice_to_string(rope, *sp);
            let content = raw.trim_start_matches([' ', '\t']);
            line_starts.push((text.len(), sp.start + raw.len() - content.len()));
            text.push_str(content);
        }

        let kept = text.trim_end().len();
        text.truncate(kept);
        Self { text, line_starts }
    }

    /// Maps an offset in the joined text back to the document.
    ///
    /// The `\n` joining two lines maps to the end of the earlier line's content.
    fn document_offset(&self, offset: usize) -> usize {
        let line = self
            .line_starts
            .partition_point(|&(start, _)| start <= offset)
            .saturating_sub(1);
        match self.line_starts.get(line) {
            Some(&(start, doc)) => doc + (offset - start),
            None => offset,
        }
    }
}

/// The text of a block's content lines joined with `\n`.
///
/// Paragraph lines lose their leading indentation and the paragraph loses
/// trailing whitespace; fenced code is kept exactly.
pub fn block_text(rope: &Rope, b: &BlockNode) -> String {
    match b.kind {
        BlockKind::Paragraph => ParagraphText::new(rope, b).text,
        BlockKind::FencedCode { .. } => b
            .lines
            .iter()
            .map(|sp| slice_to_string(rope, *sp))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Inline parse for a paragraph block; other kinds have no inline content.
///
/// Node spans are document byte offsets. A span that crosses a line break
/// also covers the next line's stripped quote prefix and indentation.
pub fn parse_inline_for_block(
    rope: &Rope,
    b: &BlockNode,
    state: &State,
) -> Vec<inline::ParsedInline> {
    if !matches!(b.kind, BlockKind::Paragraph) {
        return vec![];
    }
    let para = ParagraphText::new(rope, b);
    inline::parse_inline(0, &para.text, state)
        .into_iter()
        .map(|mut n| {
            n.span = Span::new(
                para.document_offset(n.span.start),
                para.document_offset(n.span.end),
            );
            n
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::InlineNode;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn doc(md: &str) -> (Rope, ParsedDoc) {
        let rope = Rope::from(md);
        let parsed = parse_document(&rope);
        (rope, parsed)
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let (rope, d) = doc("one\ntwo\n\nthree\n");
        assert_eq!(d.blocks.len(), 2);
        assert_eq!(block_text(&rope, &d.blocks[0]), "one\ntwo");
        assert_eq!(block_text(&rope, &d.blocks[1]), "three");
        assert_eq!(d.blocks[0].span, Span::new(0, 8));
    }

    #[test]
    fn fence_is_raw_zone() {
        let (rope, d) = doc("```html\n<b>x</b>\n  indented\n```\nafter\n");
        assert_eq!(d.blocks.len(), 2);
        assert_eq!(
            d.blocks[0].kind,
            BlockKind::FencedCode {
                info: "html".to_string()
            }
        );
        assert_eq!(block_text(&rope, &d.blocks[0]), "<b>x</b>\n  indented");
        assert!(parse_inline_for_block(&rope, &d.blocks[0], &State::new()).is_empty());
        assert_eq!(block_text(&rope, &d.blocks[1]), "after");
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let (rope, d) = doc("~~~\ncode\n\nmore");
        assert_eq!(d.blocks.len(), 1);
        assert_eq!(block_text(&rope, &d.blocks[0]), "code\n\nmore");
    }

    #[test]
    fn fence_interrupts_paragraph() {
        let (_, d) = doc("text\n```\ncode\n```\n");
        assert_eq!(d.blocks.len(), 2);
        assert_eq!(d.blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn quote_depth_changes_split_blocks() {
        let (rope, d) = doc("> quoted\n> more\nplain\n");
        assert_eq!(d.blocks.len(), 2);
        assert_eq!(d.blocks[0].quote_depth, 1);
        assert_eq!(block_text(&rope, &d.blocks[0]), "quoted\nmore");
        assert_eq!(d.blocks[1].quote_depth, 0);
    }

    #[test]
    fn unquoted_line_starts_new_quote_run() {
        let (_, d) = doc("> a\n>\n> b\n\n> c\n");
        assert_eq!(d.blocks.len(), 3);
        assert_eq!(d.blocks[0].quote_run, d.blocks[1].quote_run);
        assert_ne!(d.blocks[1].quote_run, d.blocks[2].quote_run);
    }

    #[test]
    fn paragraph_inline_spans_are_document_offsets() {
        let (rope, d) = doc("intro\n\n  see <b>this</b>\n");
        let nodes = parse_inline_for_block(&rope, &d.blocks[1], &State::new());
        assert_eq!(nodes[0].span, Span::new(9, 13));
        assert_eq!(slice_to_string(&rope, nodes[0].span), "see ");
        assert_eq!(nodes[1].node.kind_name(), "Markup");
        assert_eq!(slice_to_string(&rope, nodes[1].span), "<b>");
    }

    #[rstest]
    #[case("intro\n\n  see <b>this</b>\n")]
    #[case("> a\r\n>   <i>b</i> c\n")]
    #[case("one  \n\t<em>two</em>")]
    #[case("x\r\n  y\r\n    <!-- z --> <br/>\r\n")]
    fn markup_spans_reslice_to_source(#[case] md: &str) {
        let (rope, d) = doc(md);
        let Some(block) = d.blocks.last() else {
            panic!("no blocks in {md:?}");
        };

        let markup: Vec<_> = parse_inline_for_block(&rope, block, &State::new())
            .into_iter()
            .filter_map(|n| match n.node {
                InlineNode::Markup(m) => Some((n.span, m.html().to_string())),
                _ => None,
            })
            .collect();

        assert!(!markup.is_empty());
        for (span, html) in markup {
            assert_eq!(slice_to_string(&rope, span), html);
        }
    }
}
