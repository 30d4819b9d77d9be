use crate::{
    html::{Attributes, Element, Text},
    parsing::{
        excerpt::Excerpt,
        inline::{cursor::Cursor, types::Inline},
    },
    state::{Handler, State},
};

/// A code span: a run of backticks closed by a run of the same length.
///
/// Code spans are raw zones; nothing inside them is parsed as another inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    code: String,
    width: usize,
}

impl Code {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// The code text after newline folding and space stripping.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl Inline for Code {
    fn build(excerpt: &Excerpt<'_>, _state: &State) -> Option<Self> {
        let text = excerpt.text();
        let mut cur = Cursor::new(text);

        let fence = cur.eat_while(|b| b == Self::TICK);
        if fence == 0 {
            return None;
        }
        let inner_start = cur.pos();

        while !cur.eof() {
            if cur.peek() != Some(Self::TICK) {
                cur.bump();
                continue;
            }
            let inner_end = cur.pos();
            if cur.eat_while(|b| b == Self::TICK) == fence {
                return Some(Self {
                    code: normalize(&text[inner_start..inner_end]),
                    width: cur.pos(),
                });
            }
        }
        None
    }

    fn width(&self) -> usize {
        self.width
    }

    fn state_renderable(&self) -> Handler {
        Handler::resolved(Element::create(
            "code",
            Attributes::new(),
            vec![Text::new(self.code.clone()).into()],
        ))
    }

    fn best_plaintext(&self) -> Text {
        Text::new(self.code.clone())
    }
}

/// Folds line endings to spaces and strips one space from each side when
/// both sides have one and the content is not all spaces.
fn normalize(raw: &str) -> String {
    let folded = raw.replace("\r\n", " ").replace('\n', " ");
    let b = folded.as_bytes();
    if b.len() >= 2 && b[0] == b' ' && b[b.len() - 1] == b' ' && b.iter().any(|&c| c != b' ') {
        folded[1..folded.len() - 1].to_string()
    } else {
        folded
    }
}
