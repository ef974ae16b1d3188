//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State> {
    from: Option<S>,
    to: Option<S>,
}

impl<S: State> TransitionBuilder<S> {
    pub fn new() -> Self {
        Self { from: None, to: None }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    pub fn build(self) -> Result<Transition<S>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition { from, to })
    }
}

impl<S: State> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
