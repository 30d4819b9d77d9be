use xi_rope::Rope;

use super::span::Span;

/// One physical line of the document.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of the line, including its terminator if present.
    pub span: Span,
    pub text: String,
}

impl LineRef {
    /// The line without its `\n` / `\r\n` terminator.
    pub fn trimmed(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Iterates the document's lines with their byte spans.
///
/// Terminators are preserved so consecutive spans tile the whole rope.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
