use super::escape;

/// Text that is entity-encoded when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw, unescaped text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn get_html(&self) -> String {
        escape::html_element_value(&self.text).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_exactly_once() {
        assert_eq!(Text::new("<").get_html(), "&lt;");
        assert_eq!(Text::new("&lt;").get_html(), "&amp;lt;");
    }

    #[test]
    fn keeps_raw_text_accessible() {
        let t = Text::new("a < b");
        assert_eq!(t.text(), "a < b");
    }
}
