use crate::{
    html::{Attributes, Element, Text},
    parsing::{excerpt::Excerpt, inline::types::Inline},
    state::{Handler, State},
};

/// A forced line break: two or more spaces, or a backslash, before a newline.
///
/// Only the marker is consumed; the newline stays in the following text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardBreak {
    width: usize,
}

impl HardBreak {
    pub const BACKSLASH: u8 = b'\\';
    pub const MIN_SPACES: usize = 2;
}

impl Inline for HardBreak {
    fn build(excerpt: &Excerpt<'_>, _state: &State) -> Option<Self> {
        let b = excerpt.text().as_bytes();

        let width = match *b.first()? {
            Self::BACKSLASH => 1,
            b' ' => b.iter().take_while(|&&c| c == b' ').count(),
            _ => return None,
        };
        if b.first() == Some(&b' ') && width < Self::MIN_SPACES {
            return None;
        }

        match b.get(width..)? {
            [b'\n', ..] | [b'\r', b'\n', ..] => Some(Self { width }),
            _ => None,
        }
    }

    fn width(&self) -> usize {
        self.width
    }

    fn state_renderable(&self) -> Handler {
        Handler::resolved(Element::self_closing("br", Attributes::new()))
    }

    fn best_plaintext(&self) -> Text {
        Text::default()
    }
}
