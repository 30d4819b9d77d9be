//! Escaping primitives for each HTML context the renderer writes into.
//!
//! Element and attribute names are filtered (disallowed characters are
//! dropped), while attribute values and text content are entity-encoded.

use std::borrow::Cow;

/// Keeps only ASCII alphanumerics, the only characters a tag name may carry.
pub fn html_element_name(name: &str) -> Cow<'_, str> {
    if name.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Cow::Borrowed(name);
    }
    Cow::Owned(name.chars().filter(char::is_ascii_alphanumeric).collect())
}

/// Drops whitespace, control characters, and `"'<>/=` from an attribute name.
pub fn html_attribute_name(name: &str) -> Cow<'_, str> {
    if !name.chars().any(is_disallowed_in_attribute_name) {
        return Cow::Borrowed(name);
    }
    Cow::Owned(
        name.chars()
            .filter(|c| !is_disallowed_in_attribute_name(*c))
            .collect(),
    )
}

/// Encodes a value written between double quotes.
pub fn html_attribute_value(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Encodes text content (`&`, `<` and `>`).
pub fn html_element_value(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

fn is_disallowed_in_attribute_name(c: char) -> bool {
    c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
}
