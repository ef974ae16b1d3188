//! Core state machine types.
//!
//! - State definitions via the `State` trait
//! - Immutable, timestamped transition history
//!
//! Nothing in this module touches the terminal or the clock except through
//! the values it is handed.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
