//! The three screens and the edges between them.

use crate::builder::{simple_transition, BuildError, StateMachineBuilder};
use crate::machine::StateMachine;
use crate::state_enum;

state_enum! {
    /// Which screen the game is showing.
    pub enum Screen {
        /// Difficulty selection
        Menu,
        /// A round in progress
        Playing,
        /// Round decided, showing the result
        End,
    }
    final: [End]
}

/// Machine starting at the menu with Menu → Playing → End → Menu declared.
pub fn screen_machine() -> Result<StateMachine<Screen>, BuildError> {
    StateMachineBuilder::new()
        .initial(Screen::Menu)
        .transitions(vec![
            simple_transition(Screen::Menu, Screen::Playing),
            simple_transition(Screen::Playing, Screen::End),
            simple_transition(Screen::End, Screen::Menu),
        ])
        .build()
}
