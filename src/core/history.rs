//! Transition history.
//!
//! Every screen change the controller makes is kept as a timestamped
//! record, so a round can be replayed in logs after it ends.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use mystery_number::core::StateTransition;
/// use mystery_number::game::Screen;
///
/// let transition = StateTransition {
///     from: Screen::Menu,
///     to: Screen::Playing,
///     timestamp: Utc::now(),
///     attempt: 1,
/// };
/// assert_eq!(transition.to, Screen::Playing);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the transition happened
    pub timestamp: DateTime<Utc>,
    /// Step number in the source state on which the transition fired
    pub attempt: usize,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use mystery_number::core::{StateHistory, StateTransition};
/// use mystery_number::game::Screen;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Screen::Menu,
///         to: Screen::Playing,
///         timestamp: Utc::now(),
///         attempt: 1,
///     })
///     .record(StateTransition {
///         from: Screen::Playing,
///         to: Screen::End,
///         timestamp: Utc::now(),
///         attempt: 4,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Screen::Menu, &Screen::Playing, &Screen::End]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States visited in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and the last recorded transition.
    ///
    /// `None` when nothing has been recorded yet.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
