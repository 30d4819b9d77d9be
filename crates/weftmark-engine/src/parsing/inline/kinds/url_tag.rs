use crate::{
    html::{Attributes, Element, Text, filter_unsafe_url},
    parsing::{
        excerpt::Excerpt,
        inline::{cursor::Cursor, types::Inline},
    },
    state::{Handler, PermittedSchemes, SafeMode, State},
};

/// An autolink written as `<scheme://target>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTag {
    url: String,
}

impl UrlTag {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const SCHEME_SEPARATOR: &'static [u8; 3] = b"://";

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Inline for UrlTag {
    fn build(excerpt: &Excerpt<'_>, _state: &State) -> Option<Self> {
        let text = excerpt.text();
        let mut cur = Cursor::new(text);

        if !cur.eat(Self::OPEN) {
            return None;
        }
        if cur.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_') == 0 {
            return None;
        }
        if !cur.starts_with(Self::SCHEME_SEPARATOR) {
            return None;
        }
        cur.bump_n(Self::SCHEME_SEPARATOR.len());
        if cur.eat_while(|b| b != b' ' && b != Self::CLOSE) == 0 {
            return None;
        }
        let url_end = cur.pos();
        if !cur.eat(Self::CLOSE) {
            return None;
        }

        Some(Self {
            url: text[1..url_end].to_string(),
        })
    }

    fn width(&self) -> usize {
        self.url.len() + 2
    }

    fn state_renderable(&self) -> Handler {
        let url = self.url.clone();
        Handler::new(move |state: &State| {
            let href = if state.get_or_default::<SafeMode>().is_enabled() {
                let schemes = state.get_or_default::<PermittedSchemes>();
                filter_unsafe_url(&url, schemes.schemes()).into_owned()
            } else {
                url.clone()
            };
            Element::create(
                "a",
                Attributes::new().with("href", href),
                vec![Text::new(url).into()],
            )
            .into()
        })
    }

    fn best_plaintext(&self) -> Text {
        Text::new(self.url.clone())
    }
}
