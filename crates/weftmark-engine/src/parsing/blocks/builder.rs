use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceSig},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Paragraph {
        start: usize,
        last_line_end: usize,
        depth: u8,
        run: usize,
        lines: Vec<Span>,
    },
    Fence {
        open: FenceSig,
        start: usize,
        last_line_end: usize,
        depth: u8,
        run: usize,
        lines: Vec<Span>,
    },
}

/// Line-at-a-time block state machine.
///
/// Recognizes paragraphs and fenced code, each optionally inside blockquotes.
/// A change of quote depth ends the open block; there is no lazy continuation.
pub struct BlockBuilder {
    leaf: LeafState,
    quote_run: usize,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            quote_run: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if c.quote_depth == 0 && self.last_depth() > 0 {
            self.quote_run += 1;
        }

        if let LeafState::Fence { depth, .. } = &self.leaf
            && *depth != c.quote_depth
        {
            self.flush();
        }

        if matches!(self.leaf, LeafState::Fence { .. }) {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush();
            return;
        }

        if let Some(sig) = &c.fence_sig {
            self.flush();
            self.leaf = LeafState::Fence {
                open: sig.clone(),
                start: c.line.start,
                last_line_end: c.line.end,
                depth: c.quote_depth,
                run: self.quote_run,
                lines: vec![],
            };
            return;
        }

        self.extend_paragraph(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush; an unterminated fence runs to the end of the document
        self.flush();
        self.out
    }

    fn last_depth(&self) -> u8 {
        match &self.leaf {
            LeafState::Paragraph { depth, .. } | LeafState::Fence { depth, .. } => *depth,
            LeafState::None => self.out.last().map_or(0, |b| b.quote_depth),
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            open,
            last_line_end,
            lines,
            ..
        } = &mut self.leaf
        else {
            return;
        };

        *last_line_end = c.line.end;
        if CodeFence::closes(open, c.fence_sig.as_ref()) {
            self.flush();
        } else {
            lines.push(c.remainder_span);
        }
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        if let LeafState::Paragraph { depth, .. } = &self.leaf
            && *depth != c.quote_depth
        {
            self.flush();
        }

        match &mut self.leaf {
            LeafState::Paragraph {
                last_line_end,
                lines,
                ..
            } => {
                *last_line_end = c.line.end;
                lines.push(c.remainder_span);
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    start: c.line.start,
                    last_line_end: c.line.end,
                    depth: c.quote_depth,
                    run: self.quote_run,
                    lines: vec![c.remainder_span],
                };
            }
        }
    }

    fn flush(&mut self) {
        let node = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph {
                start,
                last_line_end,
                depth,
                run,
                lines,
            } => BlockNode {
                kind: BlockKind::Paragraph,
                quote_depth: depth,
                quote_run: run,
                span: Span::new(start, last_line_end),
                lines,
            },
            LeafState::Fence {
                open,
                start,
                last_line_end,
                depth,
                run,
                lines,
            } => BlockNode {
                kind: BlockKind::FencedCode { info: open.info },
                quote_depth: depth,
                quote_run: run,
                span: Span::new(start, last_line_end),
                lines,
            },
        };
        self.out.push(node);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
