//! The guessing game itself.
//!
//! [`GameController`] owns a [`StateMachine`](crate::machine::StateMachine)
//! over [`Screen`], the current [`Session`] and the best score. Each guess is
//! scored into a [`TransitionResult`](crate::machine::TransitionResult) and
//! applied to the machine: a win moves to `End`, a wrong guess is a retry, and
//! running out of attempts aborts into `End`.

pub mod controller;
pub mod difficulty;
pub mod guess;
pub mod layout;
pub mod screen;
pub mod secret;
pub mod session;

pub use controller::GameController;
pub use difficulty::{Difficulty, DifficultyTable, EASY, HARD, NORMAL};
pub use guess::{parse_guess, GuessError};
pub use screen::{screen_machine, Screen};
pub use secret::{RngSource, SecretSource};
pub use session::{attempts_label, Session};
