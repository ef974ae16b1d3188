//! Transition table entries and step outcomes.

use crate::core::State;

/// Outcome of one step of game logic, handed to the machine to apply.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionResult<S: State> {
    /// Move to the given state
    Success(S),

    /// Stay put and show feedback to the player
    Retry { feedback: String, current_state: S },

    /// Give up on the current state and move to `error_state`
    Abort { reason: String, error_state: S },
}

/// Errors that can occur when applying a transition
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("No transition declared from '{from}' to '{to}'")]
    NoTransition { from: String, to: String },
}

/// A declared edge of the state graph.
#[derive(Clone, Debug)]
pub struct Transition<S: State> {
    pub from: S,
    pub to: S,
}

impl<S: State> Transition<S> {
    /// Whether this edge leads from `current` to `target`.
    pub fn can_execute(&self, current: &S, target: &S) -> bool {
        *current == self.from && *target == self.to
    }
}
