//! Executing state machine.
//!
//! Game logic decides *what* should happen as a [`TransitionResult`]; the
//! [`StateMachine`] checks it against the declared transition table, moves
//! the current state and records history.
//!
//! # Key Concepts
//!
//! - **Transitions**: declared edges between states
//! - **Step outcomes**: success, retry with feedback, or abort to an error state
//! - **History**: every applied transition is timestamped and kept

#[allow(clippy::module_inception)]
mod machine;
mod transition;

pub use machine::{StateMachine, StepResult};
pub use transition::{Transition, TransitionError, TransitionResult};
