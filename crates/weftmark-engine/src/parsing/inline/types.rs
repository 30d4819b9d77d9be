use crate::{
    html::Text,
    parsing::{excerpt::Excerpt, rope::span::Span},
    state::{Handler, State},
};

use super::kinds::{Code, HardBreak, Markup, PlainText, UrlTag};

/// The contract every inline variant satisfies.
///
/// `build` is tried at a cursor position and either matches a prefix of the
/// excerpt or returns `None` so the next variant can try. Grammar decisions
/// must not depend on state that is only final after scanning; such state is
/// consulted in the [`Handler`] returned by `state_renderable`.
pub trait Inline: Sized {
    fn build(excerpt: &Excerpt<'_>, state: &State) -> Option<Self>;

    /// Exact number of source bytes the match covers, counted from its begin position.
    fn width(&self) -> usize;

    /// Document offset where the match starts, for variants that look behind
    /// the cursor. `None` means the match starts at the offering cursor.
    fn begin_position(&self) -> Option<usize> {
        None
    }

    /// The deferred render decision for this node.
    fn state_renderable(&self) -> Handler;

    /// Flattened text for contexts that want no markup (alt text, summaries).
    fn best_plaintext(&self) -> Text;
}

/// An inline node of any known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Code(Code),
    HardBreak(HardBreak),
    UrlTag(UrlTag),
    Markup(Markup),
    /// Literal text no variant claimed.
    PlainText(PlainText),
}

impl InlineNode {
    pub fn kind_name(&self) -> &'static str {
        match self {
            InlineNode::Code(_) => "Code",
            InlineNode::HardBreak(_) => "HardBreak",
            InlineNode::UrlTag(_) => "UrlTag",
            InlineNode::Markup(_) => "Markup",
            InlineNode::PlainText(_) => "PlainText",
        }
    }

    pub fn width(&self) -> usize {
        match self {
            InlineNode::Code(n) => n.width(),
            InlineNode::HardBreak(n) => n.width(),
            InlineNode::UrlTag(n) => n.width(),
            InlineNode::Markup(n) => n.width(),
            InlineNode::PlainText(n) => n.width(),
        }
    }

    pub fn begin_position(&self) -> Option<usize> {
        match self {
            InlineNode::Code(n) => n.begin_position(),
            InlineNode::HardBreak(n) => n.begin_position(),
            InlineNode::UrlTag(n) => n.begin_position(),
            InlineNode::Markup(n) => n.begin_position(),
            InlineNode::PlainText(n) => n.begin_position(),
        }
    }

    pub fn state_renderable(&self) -> Handler {
        match self {
            InlineNode::Code(n) => n.state_renderable(),
            InlineNode::HardBreak(n) => n.state_renderable(),
            InlineNode::UrlTag(n) => n.state_renderable(),
            InlineNode::Markup(n) => n.state_renderable(),
            InlineNode::PlainText(n) => n.state_renderable(),
        }
    }

    pub fn best_plaintext(&self) -> Text {
        match self {
            InlineNode::Code(n) => n.best_plaintext(),
            InlineNode::HardBreak(n) => n.best_plaintext(),
            InlineNode::UrlTag(n) => n.best_plaintext(),
            InlineNode::Markup(n) => n.best_plaintext(),
            InlineNode::PlainText(n) => n.best_plaintext(),
        }
    }
}

impl From<Code> for InlineNode {
    fn from(n: Code) -> Self {
        InlineNode::Code(n)
    }
}

impl From<HardBreak> for InlineNode {
    fn from(n: HardBreak) -> Self {
        InlineNode::HardBreak(n)
    }
}

impl From<UrlTag> for InlineNode {
    fn from(n: UrlTag) -> Self {
        InlineNode::UrlTag(n)
    }
}

impl From<Markup> for InlineNode {
    fn from(n: Markup) -> Self {
        InlineNode::Markup(n)
    }
}

impl From<PlainText> for InlineNode {
    fn from(n: PlainText) -> Self {
        InlineNode::PlainText(n)
    }
}

/// A node together with the byte span of source it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInline {
    pub span: Span,
    pub node: InlineNode,
}
