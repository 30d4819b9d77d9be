use crate::html::COMMON_SCHEMES;

use super::Configurable;

/// Whether raw HTML in the source is escaped rather than emitted.
///
/// Disabled by default: documents are trusted unless the caller says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SafeMode(bool);

impl SafeMode {
    pub const fn new(enabled: bool) -> Self {
        Self(enabled)
    }

    pub const fn enabled() -> Self {
        Self(true)
    }

    pub const fn disabled() -> Self {
        Self(false)
    }

    pub const fn is_enabled(self) -> bool {
        self.0
    }
}

impl Configurable for SafeMode {
    fn initial() -> Self {
        Self::disabled()
    }
}

/// URL prefixes that survive `filter_unsafe_url` while safe mode is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermittedSchemes(Vec<String>);

impl PermittedSchemes {
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(schemes.into_iter().map(Into::into).collect())
    }

    pub fn schemes(&self) -> &[String] {
        &self.0
    }
}

impl Configurable for PermittedSchemes {
    fn initial() -> Self {
        Self::new(COMMON_SCHEMES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_mode_defaults_to_disabled() {
        assert_eq!(SafeMode::initial(), SafeMode::disabled());
        assert_eq!(SafeMode::default(), SafeMode::disabled());
        assert!(SafeMode::new(true).is_enabled());
    }

    #[test]
    fn permitted_schemes_default_to_common_list() {
        let initial = PermittedSchemes::initial();
        assert_eq!(initial.schemes().len(), COMMON_SCHEMES.len());
        assert_eq!(initial.schemes()[0], "http://");
    }
}
