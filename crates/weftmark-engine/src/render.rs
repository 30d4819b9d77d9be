//! # Compile
//!
//! The two-phase compile. [`Compiler::scan`] turns Markdown into a
//! [`ScannedDocument`] of blocks and inline nodes; [`ScannedDocument::render`]
//! resolves every node's deferred handler against a frozen [`State`] and
//! serializes the resulting tree.

use xi_rope::Rope;

use crate::{
    html::{Attributes, Element, Renderable, Text},
    parsing::{
        block_text,
        blocks::{BlockKind, BlockNode, kinds::CodeFence},
        inline::ParsedInline,
        parse_document, parse_inline_for_block,
        rope::{preview, slice_to_string},
    },
    state::{SafeMode, State},
};

/// Compiles Markdown documents under one configuration.
///
/// Each call works on its own copy of the state, so a `Compiler` can be
/// shared between threads compiling independent documents.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    state: State,
}

impl Compiler {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Runs the scan phase only.
    pub fn scan(&self, markdown: &str) -> ScannedDocument {
        let rope = Rope::from(markdown);
        let doc = parse_document(&rope);
        log::debug!("scanned {} blocks", doc.blocks.len());

        let blocks = doc
            .blocks
            .iter()
            .map(|b| ScannedBlock::scan(&rope, b, &self.state))
            .collect();
        ScannedDocument { blocks }
    }

    /// Compiles `markdown` to an HTML fragment.
    pub fn compile(&self, markdown: &str) -> String {
        self.scan(markdown).to_html(&self.state)
    }

    /// Flattens `markdown` to text with no markup.
    pub fn plaintext(&self, markdown: &str) -> String {
        self.scan(markdown)
            .blocks
            .iter()
            .map(ScannedBlock::plaintext)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// The output of the scan phase, waiting for a final state.
#[derive(Debug)]
pub struct ScannedDocument {
    blocks: Vec<ScannedBlock>,
}

impl ScannedDocument {
    pub fn blocks(&self) -> &[ScannedBlock] {
        &self.blocks
    }

    /// Runs the render phase, consuming the scanned nodes.
    pub fn render(self, state: &State) -> Vec<Renderable> {
        log::debug!(
            "rendering {} blocks, safe mode {}",
            self.blocks.len(),
            state.get_or_default::<SafeMode>().is_enabled()
        );
        render_blocks(self.blocks, 0, state)
    }

    /// Renders and serializes; top-level blocks are separated by newlines.
    pub fn to_html(self, state: &State) -> String {
        self.render(state)
            .iter()
            .map(Renderable::get_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug)]
pub struct ScannedBlock {
    pub quote_depth: u8,
    pub quote_run: usize,
    pub content: BlockContent,
}

#[derive(Debug)]
pub enum BlockContent {
    Paragraph(Vec<ParsedInline>),
    FencedCode { info: String, code: String },
}

impl ScannedBlock {
    fn scan(rope: &Rope, b: &BlockNode, state: &State) -> Self {
        let content = match &b.kind {
            BlockKind::Paragraph => {
                let nodes = parse_inline_for_block(rope, b, state);
                log::trace!(
                    "paragraph {:?} has {} inline nodes",
                    preview(&slice_to_string(rope, b.span), 40),
                    nodes.len()
                );
                BlockContent::Paragraph(nodes)
            }
            BlockKind::FencedCode { info } => BlockContent::FencedCode {
                info: info.clone(),
                code: block_text(rope, b),
            },
        };
        Self {
            quote_depth: b.quote_depth,
            quote_run: b.quote_run,
            content,
        }
    }

    fn plaintext(&self) -> String {
        match &self.content {
            BlockContent::Paragraph(nodes) => nodes
                .iter()
                .map(|n| n.node.best_plaintext().text().to_string())
                .collect(),
            BlockContent::FencedCode { code, .. } => code.clone(),
        }
    }

    fn render(self, state: &State) -> Renderable {
        match self.content {
            BlockContent::Paragraph(nodes) => {
                let contents = nodes
                    .into_iter()
                    .map(|n| n.node.state_renderable().resolve(state))
                    .collect();
                Element::create("p", Attributes::new(), contents).into()
            }
            BlockContent::FencedCode { info, code } => {
                let attributes = match CodeFence::language(&info) {
                    Some(lang) => Attributes::new().with("class", format!("language-{lang}")),
                    None => Attributes::new(),
                };
                let code = Element::create("code", attributes, vec![Text::new(code).into()]);
                Element::create("pre", Attributes::new(), vec![code.into()]).into()
            }
        }
    }
}

/// Renders blocks quoted at least `depth` deep, wrapping each run of deeper
/// blocks in a `<blockquote>`.
fn render_blocks(blocks: Vec<ScannedBlock>, depth: u8, state: &State) -> Vec<Renderable> {
    let mut out = vec![];
    let mut iter = blocks.into_iter().peekable();

    while let Some(block) = iter.next() {
        if block.quote_depth <= depth {
            out.push(block.render(state));
            continue;
        }

        let run = block.quote_run;
        let mut quoted = vec![block];
        while let Some(next) = iter.next_if(|b| b.quote_depth > depth && b.quote_run == run) {
            quoted.push(next);
        }
        let inner = render_blocks(quoted, depth + 1, state);
        out.push(Element::create("blockquote", Attributes::new(), inner).into());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PermittedSchemes;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn compile(md: &str) -> String {
        Compiler::default().compile(md)
    }

    fn compile_safe(md: &str) -> String {
        Compiler::new(State::new().setting(SafeMode::enabled())).compile(md)
    }

    #[test]
    fn raw_markup_passes_through_when_unsafe() {
        assert_eq!(compile("<b>hi</b>"), "<p><b>hi</b></p>");
    }

    #[test]
    fn raw_markup_is_escaped_in_safe_mode() {
        assert_eq!(
            compile_safe("<b>hi</b>"),
            "<p>&lt;b&gt;hi&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn one_scan_renders_under_either_state() {
        let compiler = Compiler::default();
        let safe = State::new().setting(SafeMode::enabled());

        assert_eq!(
            compiler.scan("a <i>b</i>").to_html(&safe),
            "<p>a &lt;i&gt;b&lt;/i&gt;</p>"
        );
        assert_eq!(
            compiler.scan("a <i>b</i>").to_html(compiler.state()),
            "<p>a <i>b</i></p>"
        );
    }

    #[test]
    fn plain_text_is_escaped() {
        assert_eq!(compile("1 < 2 & 3 > 2"), "<p>1 &lt; 2 &amp; 3 &gt; 2</p>");
    }

    #[test]
    fn paragraphs_join_with_newline() {
        assert_snapshot!(compile("first\n\nsecond line\nthird"), @r"
        <p>first</p>
        <p>second line
        third</p>
        ");
    }

    #[test]
    fn inline_variants_in_one_paragraph() {
        assert_snapshot!(
            compile("use `a<b` or <https://example.com>  \nnext <!-- c -->"),
            @r#"
        <p>use <code>a&lt;b</code> or <a href="https://example.com">https://example.com</a><br />
        next <!-- c --></p>
        "#
        );
    }

    #[test]
    fn fenced_code_is_escaped_and_labelled() {
        assert_snapshot!(compile("```rust extra\nlet x = a < b;\n```"), @r#"<pre><code class="language-rust">let x = a &lt; b;</code></pre>"#);
        assert_eq!(compile("~~~\nplain\n~~~"), "<pre><code>plain</code></pre>");
    }

    #[test]
    fn blockquotes_group_consecutive_quoted_blocks() {
        assert_snapshot!(compile("> a\n>\n> b\n\nafter"), @r"
        <blockquote>
        <p>a</p>
        <p>b</p>
        </blockquote>
        <p>after</p>
        ");
    }

    #[test]
    fn nested_blockquotes() {
        assert_snapshot!(compile("> outer\n>> inner"), @r"
        <blockquote>
        <p>outer</p>
        <blockquote>
        <p>inner</p>
        </blockquote>
        </blockquote>
        ");
    }

    #[test]
    fn separated_quotes_stay_separate() {
        assert_snapshot!(compile("> a\n\n> b"), @r"
        <blockquote>
        <p>a</p>
        </blockquote>
        <blockquote>
        <p>b</p>
        </blockquote>
        ");
    }

    #[test]
    fn safe_mode_filters_autolink_schemes() {
        let state = State::new()
            .setting(SafeMode::enabled())
            .setting(PermittedSchemes::new(["https://"]));
        let html = Compiler::new(state).compile("<http://example.com>");
        assert_eq!(
            html,
            r#"<p><a href="http%3A//example.com">http://example.com</a></p>"#
        );
    }

    #[test]
    fn empty_document_compiles_to_nothing() {
        assert_eq!(compile(""), "");
        assert_eq!(compile("\n\n  \n"), "");
    }

    #[test]
    fn plaintext_drops_markup() {
        let text = Compiler::default().plaintext("see <b>bold</b> `x`\n\n```\ncode\n```");
        assert_eq!(text, "see <b>bold</b> x\n\ncode");
    }
}
