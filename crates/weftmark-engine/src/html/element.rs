use super::{escape, renderable::Renderable};

/// Tags that stay on the same line as their siblings when serialized.
///
/// Anything not listed here is treated as block-level and gets its own line.
pub const TEXT_LEVEL_ELEMENTS: &[&str] = &[
    "a", "b", "i", "q", "s", "u", //
    "br", "em", "rp", "rt", "tt", "xm", //
    "bdo", "big", "del", "img", "ins", "kbd", "sub", "sup", "var", "wbr", //
    "abbr", "cite", "code", "font", "mark", "nobr", "ruby", "span", "time", //
    "blink", "small", //
    "nextid", "spacer", "strike", "strong", //
    "acronym", "listing", "marquee", //
    "basefont",
];

/// Attribute list with unique names, kept in insertion order.
///
/// Order is significant: attributes serialize in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing an existing value in place or appending.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Builder form of [`Attributes::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// An HTML element.
///
/// `contents: None` is a void element (`<br />`); `Some(vec![])` is a paired
/// element with nothing inside (`<p></p>`). Elements are values: the
/// `setting_*` methods return a modified copy and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Attributes,
    contents: Option<Vec<Renderable>>,
}

impl Element {
    pub fn new(
        name: impl Into<String>,
        attributes: Attributes,
        contents: Option<Vec<Renderable>>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            contents,
        }
    }

    /// A paired element; serializes with a closing tag even when `contents` is empty.
    pub fn create(name: impl Into<String>, attributes: Attributes, contents: Vec<Renderable>) -> Self {
        Self::new(name, attributes, Some(contents))
    }

    /// A void element with no contents slot.
    pub fn self_closing(name: impl Into<String>, attributes: Attributes) -> Self {
        Self::new(name, attributes, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn contents(&self) -> Option<&[Renderable]> {
        self.contents.as_deref()
    }

    #[must_use]
    pub fn setting_name(&self, name: impl Into<String>) -> Self {
        Self::new(name, self.attributes.clone(), self.contents.clone())
    }

    #[must_use]
    pub fn setting_attributes(&self, attributes: Attributes) -> Self {
        Self::new(self.name.clone(), attributes, self.contents.clone())
    }

    #[must_use]
    pub fn setting_contents(&self, contents: Option<Vec<Renderable>>) -> Self {
        Self::new(self.name.clone(), self.attributes.clone(), contents)
    }

    /// Whether this element flows inline for pretty-printing purposes.
    pub fn is_text_level(&self) -> bool {
        let lower = self.name.to_ascii_lowercase();
        TEXT_LEVEL_ELEMENTS.contains(&lower.as_str())
    }

    pub fn get_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        let name = escape::html_element_name(&self.name);

        out.push('<');
        out.push_str(&name);

        for (attr, value) in self.attributes.iter() {
            out.push(' ');
            out.push_str(&escape::html_attribute_name(attr));
            out.push_str("=\"");
            out.push_str(&escape::html_attribute_value(value));
            out.push('"');
        }

        let Some(contents) = &self.contents else {
            out.push_str(" />");
            return;
        };

        out.push('>');

        if contents.first().is_some_and(is_block_element) {
            out.push('\n');
        }

        for child in contents {
            child.write_html(out);
            if is_block_element(child) {
                out.push('\n');
            }
        }

        out.push_str("</");
        out.push_str(&name);
        out.push('>');
    }
}

fn is_block_element(r: &Renderable) -> bool {
    r.as_element().is_some_and(|e| !e.is_text_level())
}
