//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and the [`state_enum!`](crate::state_enum)
//! macro for declaring a transition table with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::State;
use crate::machine::Transition;

/// Create an unconditional edge from `from` to `to`.
///
/// # Example
///
/// ```
/// use mystery_number::builder::simple_transition;
/// use mystery_number::game::Screen;
///
/// let transition = simple_transition(Screen::End, Screen::Menu);
/// assert!(transition.can_execute(&Screen::End, &Screen::Menu));
/// ```
pub fn simple_transition<S: State>(from: S, to: S) -> Transition<S> {
    Transition { from, to }
}
