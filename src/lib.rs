//! Mystery Number: a terminal guess-the-number game.
//!
//! The game is a three-screen state machine (Menu → Playing → End → Menu)
//! built on a small typed state machine core. Input handling and rendering
//! are kept apart from the rules: the controller consumes [`ui::InputEvent`]s
//! and produces [`ui::Frame`]s, and only [`frontend`] talks to a real
//! terminal.
//!
//! # Modules
//!
//! - [`core`]: the `State` trait and transition history
//! - [`machine`]: transition table, step outcomes and the executing machine
//! - [`builder`]: fluent machine construction and the `state_enum!` macro
//! - [`enforcement`]: attempt limits checked against a transition context
//! - [`ui`]: buttons, the numeric text field and draw lists
//! - [`game`]: difficulties, guess parsing, sessions and the controller
//! - [`app`] / [`frontend`]: the frame loop and the crossterm backend
//!
//! # Example
//!
//! ```rust
//! use mystery_number::game::{GameController, Screen, SecretSource, EASY};
//!
//! struct Fixed(u32);
//!
//! impl SecretSource for Fixed {
//!     fn draw(&mut self, _max: u32) -> u32 {
//!         self.0
//!     }
//! }
//!
//! let mut game = GameController::new(Fixed(27)).unwrap();
//! game.start_game(EASY);
//!
//! game.submit_guess("10");
//! assert_eq!(game.status(), "Go higher!");
//!
//! game.submit_guess("27");
//! assert_eq!(game.screen(), &Screen::End);
//! assert_eq!(game.best_score(), Some(2));
//! ```

pub mod app;
pub mod builder;
pub mod config;
pub mod core;
pub mod enforcement;
pub mod frontend;
pub mod game;
pub mod machine;
pub mod ui;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use core::{State, StateHistory, StateTransition};
pub use game::{GameController, Screen};
pub use machine::{StateMachine, StepResult, TransitionError, TransitionResult};
