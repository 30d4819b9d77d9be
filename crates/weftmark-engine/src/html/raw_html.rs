/// Markup emitted verbatim.
///
/// Only build this from trusted source (safe mode off) or from markup that
/// has already been sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawHtml {
    html: String,
}

impl RawHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn get_html(&self) -> String {
        self.html.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_verbatim() {
        let raw = RawHtml::new("<b onclick=\"x()\">&amp;</b>");
        assert_eq!(raw.get_html(), "<b onclick=\"x()\">&amp;</b>");
    }
}
