//! # Parse State
//!
//! A type-keyed registry of document-wide settings, threaded through the scan
//! phase and frozen before rendering. Each kind of setting is its own type
//! implementing [`Configurable`], which also supplies the value used when the
//! kind was never set.
//!
//! `State` is a value: `setting` returns a new state and never touches the
//! receiver, so a state handed to the render phase cannot change under it.
//! Each document compile gets its own instance.

pub mod configurables;
pub mod handler;

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::Arc,
};

pub use configurables::{PermittedSchemes, SafeMode};
pub use handler::Handler;

/// A kind of setting stored in [`State`].
pub trait Configurable: Any + Clone + Send + Sync {
    /// The value reported when the state holds nothing for this kind.
    fn initial() -> Self;
}

#[derive(Clone, Default)]
pub struct State {
    values: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this state with `value` stored for its kind.
    #[must_use]
    pub fn setting<C: Configurable>(&self, value: C) -> Self {
        let mut values = self.values.clone();
        values.insert(TypeId::of::<C>(), Arc::new(value));
        Self { values }
    }

    /// Returns the stored value of kind `C`, if any.
    pub fn get<C: Configurable>(&self) -> Option<&C> {
        self.values
            .get(&TypeId::of::<C>())
            .and_then(|v| (**v).downcast_ref::<C>())
    }

    /// Returns the stored value of kind `C`, or `C::initial()` if unset.
    pub fn get_or_default<C: Configurable>(&self) -> C {
        self.get::<C>().cloned().unwrap_or_else(C::initial)
    }

    pub fn is_set<C: Configurable>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<C>())
    }

    /// Combines two states; values in `other` win.
    #[must_use]
    pub fn merged_with(&self, other: &State) -> Self {
        let mut values = self.values.clone();
        values.extend(other.values.iter().map(|(k, v)| (*k, Arc::clone(v))));
        Self { values }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("kinds", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_kind_reports_initial_value() {
        let state = State::new();
        assert!(!state.is_set::<SafeMode>());
        assert!(state.get::<SafeMode>().is_none());
        assert_eq!(state.get_or_default::<SafeMode>(), SafeMode::initial());
        assert!(!state.get_or_default::<SafeMode>().is_enabled());
    }

    #[test]
    fn setting_returns_new_state() {
        let original = State::new();
        let safe = original.setting(SafeMode::enabled());

        assert!(!original.is_set::<SafeMode>());
        assert!(safe.get_or_default::<SafeMode>().is_enabled());
    }

    #[test]
    fn kinds_are_independent() {
        let state = State::new()
            .setting(SafeMode::enabled())
            .setting(PermittedSchemes::new(["https://"]));

        assert!(state.get_or_default::<SafeMode>().is_enabled());
        assert_eq!(
            state.get_or_default::<PermittedSchemes>().schemes(),
            ["https://".to_string()]
        );
    }

    #[test]
    fn later_setting_overrides_earlier() {
        let state = State::new()
            .setting(SafeMode::enabled())
            .setting(SafeMode::disabled());
        assert!(!state.get_or_default::<SafeMode>().is_enabled());
    }

    #[test]
    fn merge_prefers_other() {
        let base = State::new()
            .setting(SafeMode::disabled())
            .setting(PermittedSchemes::new(["ftp://"]));
        let overrides = State::new().setting(SafeMode::enabled());

        let merged = base.merged_with(&overrides);
        assert!(merged.get_or_default::<SafeMode>().is_enabled());
        assert_eq!(
            merged.get_or_default::<PermittedSchemes>().schemes(),
            ["ftp://".to_string()]
        );
    }
}
