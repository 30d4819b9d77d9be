use super::{element::Element, raw_html::RawHtml, text::Text};

/// A node of the output tree.
///
/// The set is closed: escaped text, trusted raw markup, or an element that
/// owns further renderables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderable {
    Text(Text),
    RawHtml(RawHtml),
    Element(Element),
}

impl Renderable {
    pub fn get_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Renderable::Text(text) => out.push_str(&text.get_html()),
            Renderable::RawHtml(raw) => out.push_str(&raw.get_html()),
            Renderable::Element(element) => element.write_html(out),
        }
    }

    /// Returns the element if this renderable is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Renderable::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Text> for Renderable {
    fn from(text: Text) -> Self {
        Renderable::Text(text)
    }
}

impl From<RawHtml> for Renderable {
    fn from(raw: RawHtml) -> Self {
        Renderable::RawHtml(raw)
    }
}

impl From<Element> for Renderable {
    fn from(element: Element) -> Self {
        Renderable::Element(element)
    }
}
