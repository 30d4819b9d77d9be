use crate::parsing::rope::span::Span;

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// A fenced code block (``` or ~~~).
    FencedCode {
        /// The trimmed text after the opening marker.
        info: String,
    },
}

/// A parsed block node with its nesting, kind, and spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// How many `>` prefixes the block's lines carry.
    pub quote_depth: u8,
    /// Blocks in the same uninterrupted run of quoted lines share this number.
    pub quote_run: usize,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Per-line content spans with prefixes and line terminators removed.
    /// For fences these are the lines between the delimiters.
    pub lines: Vec<Span>,
}
