use std::borrow::Cow;

/// URL prefixes considered safe to emit as-is.
pub const COMMON_SCHEMES: &[&str] = &[
    "http://",
    "https://",
    "ftp://",
    "ftps://",
    "mailto:",
    "tel:",
    "data:image/png;base64,",
    "data:image/gif;base64,",
    "data:image/jpeg;base64,",
    "irc:",
    "ircs:",
    "git:",
    "ssh:",
    "news:",
    "steam:",
];

/// Defuses a URL whose scheme is not permitted.
///
/// URLs starting with any of `permitted_schemes` (compared ASCII
/// case-insensitively) pass through unchanged. Anything else has each `:`
/// percent-encoded, so `javascript:alert(1)` becomes `javascript%3Aalert(1)`.
pub fn filter_unsafe_url<'a, S: AsRef<str>>(url: &'a str, permitted_schemes: &[S]) -> Cow<'a, str> {
    let permitted = permitted_schemes
        .iter()
        .any(|scheme| starts_with_ignore_ascii_case(url, scheme.as_ref()));

    if permitted {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(url.replace(':', "%3A"))
    }
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}
