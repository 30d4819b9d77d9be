use crate::{
    html::Text,
    parsing::{excerpt::Excerpt, inline::types::Inline},
    state::{Handler, State},
};

/// Literal text. Built by the dispatcher for runs no other variant claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainText {
    text: String,
}

impl PlainText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Inline for PlainText {
    /// Claims the whole remaining excerpt.
    fn build(excerpt: &Excerpt<'_>, _state: &State) -> Option<Self> {
        let text = excerpt.text();
        (!text.is_empty()).then(|| Self::new(text))
    }

    fn width(&self) -> usize {
        self.text.len()
    }

    fn state_renderable(&self) -> Handler {
        Handler::resolved(Text::new(self.text.clone()))
    }

    fn best_plaintext(&self) -> Text {
        Text::new(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_rest_of_excerpt() {
        let ex = Excerpt::new("ab <c>", 0).adding_to_offset(1);
        let t = PlainText::build(&ex, &State::new()).unwrap();
        assert_eq!(t.text(), "b <c>");
        assert_eq!(t.width(), 5);
    }

    #[test]
    fn empty_excerpt_does_not_match() {
        let ex = Excerpt::new("ab", 0).adding_to_offset(2);
        assert!(PlainText::build(&ex, &State::new()).is_none());
    }

    #[test]
    fn renders_escaped() {
        let t = PlainText::new("a < b");
        assert_eq!(t.state_renderable().resolve(&State::new()).get_html(), "a &lt; b");
    }
}
