//! Raw inline HTML: closing tags, comments, and opening/self-closing tags.
//!
//! The second byte picks exactly one sub-grammar, and each sub-grammar is a
//! single forward scan that never revisits a consumed byte.

use crate::{
    html::{RawHtml, Text},
    parsing::{
        excerpt::Excerpt,
        inline::{cursor::Cursor, types::Inline},
    },
    state::{Handler, SafeMode, State},
};

/// A raw HTML fragment, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    html: String,
}

impl Markup {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const END_TAG: u8 = b'/';
    pub const DECLARATION: u8 = b'!';
    pub const COMMENT_OPEN: &'static [u8; 4] = b"<!--";
    pub const COMMENT_CLOSE: &'static [u8; 3] = b"-->";

    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// The matched source text.
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl Inline for Markup {
    fn build(excerpt: &Excerpt<'_>, _state: &State) -> Option<Self> {
        let text = excerpt.text();
        let bytes = text.as_bytes();

        if bytes.first() != Some(&Self::OPEN) || !bytes.contains(&Self::CLOSE) {
            return None;
        }

        let width = match *bytes.get(1)? {
            Self::END_TAG => scan_closing_tag(text),
            Self::DECLARATION => scan_comment(text),
            b' ' => None,
            _ => scan_opening_tag(text),
        }?;

        Some(Self::new(&text[..width]))
    }

    fn width(&self) -> usize {
        self.html.len()
    }

    fn state_renderable(&self) -> Handler {
        let html = self.html.clone();
        Handler::new(move |state: &State| {
            if state.get_or_default::<SafeMode>().is_enabled() {
                Text::new(html).into()
            } else {
                RawHtml::new(html).into()
            }
        })
    }

    fn best_plaintext(&self) -> Text {
        Text::new(self.html.clone())
    }
}

fn is_tag_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

fn is_tag_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn is_attribute_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b':'
}

fn is_attribute_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b':' | b'.' | b'-')
}

/// ASCII whitespace plus vertical tab.
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0B
}

fn is_unquoted_value_char(b: u8) -> bool {
    !is_space(b) && !matches!(b, b'"' | b'\'' | b'=' | b'<' | b'>' | b'`')
}

/// Consumes `[A-Za-z][A-Za-z0-9-]*`.
fn eat_tag_name(cur: &mut Cursor<'_>) -> bool {
    if !cur.peek().is_some_and(is_tag_name_start) {
        return false;
    }
    cur.bump();
    cur.eat_while(is_tag_name_char);
    true
}

/// `</name *>`
fn scan_closing_tag(text: &str) -> Option<usize> {
    let mut cur = Cursor::new(text);
    cur.bump_n(2);
    if !eat_tag_name(&mut cur) {
        return None;
    }
    cur.eat_while(|b| b == b' ');
    cur.eat(Markup::CLOSE).then(|| cur.pos())
}

/// `<!--` body `-->`, where the body starts with neither `>` nor `->` and
/// contains no `--`. The first `--` after the body's opening byte must be
/// the start of `-->`.
fn scan_comment(text: &str) -> Option<usize> {
    let mut cur = Cursor::new(text);
    if !cur.starts_with(Markup::COMMENT_OPEN) {
        return None;
    }
    cur.bump_n(Markup::COMMENT_OPEN.len());
    cur.eat(b'-');
    match cur.bump() {
        Some(b'>' | b'-') | None => return None,
        Some(_) => {}
    }

    loop {
        if cur.starts_with(b"--") {
            if !cur.starts_with(Markup::COMMENT_CLOSE) {
                return None;
            }
            cur.bump_n(Markup::COMMENT_CLOSE.len());
            return Some(cur.pos());
        }
        cur.bump()?;
    }
}

/// `<name` attributes ` *` `/?` `>`
fn scan_opening_tag(text: &str) -> Option<usize> {
    let mut cur = Cursor::new(text);
    cur.bump();
    if !eat_tag_name(&mut cur) {
        return None;
    }

    loop {
        let before = cur.clone();
        cur.eat_while(|b| b == b' ');
        if !eat_attribute(&mut cur) {
            cur = before;
            break;
        }
    }

    cur.eat_while(|b| b == b' ');
    cur.eat(Markup::END_TAG);
    cur.eat(Markup::CLOSE).then(|| cur.pos())
}

/// One attribute: a name, then optionally `=` and a value. On a malformed
/// value the cursor is left just after the name (a bare attribute).
fn eat_attribute(cur: &mut Cursor<'_>) -> bool {
    if !cur.peek().is_some_and(is_attribute_name_start) {
        return false;
    }
    cur.bump();
    cur.eat_while(is_attribute_name_char);

    let after_name = cur.clone();
    if !eat_attribute_value(cur) {
        *cur = after_name;
    }
    true
}

fn eat_attribute_value(cur: &mut Cursor<'_>) -> bool {
    cur.eat_while(is_space);
    if !cur.eat(b'=') {
        return false;
    }
    cur.eat_while(is_space);

    match cur.peek() {
        Some(quote @ (b'"' | b'\'')) => {
            cur.bump();
            cur.eat_through(quote)
        }
        Some(_) => cur.eat_while(is_unquoted_value_char) > 0,
        None => false,
    }
}
