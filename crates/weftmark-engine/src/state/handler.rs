use std::fmt;

use crate::html::Renderable;

use super::State;

/// A render decision deferred until the document's state is final.
///
/// Inline nodes hand one of these out during scanning; the render phase
/// resolves it exactly once against the frozen [`State`].
pub struct Handler {
    compute: Box<dyn FnOnce(&State) -> Renderable + Send>,
}

impl Handler {
    pub fn new<F>(compute: F) -> Self
    where
        F: FnOnce(&State) -> Renderable + Send + 'static,
    {
        Self {
            compute: Box::new(compute),
        }
    }

    /// A handler whose output does not depend on state.
    pub fn resolved(renderable: impl Into<Renderable>) -> Self {
        let renderable = renderable.into();
        Self::new(move |_| renderable)
    }

    pub fn resolve(self, state: &State) -> Renderable {
        (self.compute)(state)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{html::Text, state::SafeMode};

    #[test]
    fn resolves_against_given_state() {
        let make = || {
            Handler::new(|state: &State| {
                let label = if state.get_or_default::<SafeMode>().is_enabled() {
                    "safe"
                } else {
                    "trusted"
                };
                Text::new(label).into()
            })
        };

        let safe = State::new().setting(SafeMode::enabled());
        assert_eq!(make().resolve(&safe).get_html(), "safe");
        assert_eq!(make().resolve(&State::new()).get_html(), "trusted");
    }

    #[test]
    fn resolved_ignores_state() {
        let handler = Handler::resolved(Text::new("x"));
        let out = handler.resolve(&State::new().setting(SafeMode::enabled()));
        assert_eq!(out, Renderable::Text(Text::new("x")));
    }
}
