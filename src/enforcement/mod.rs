//! Policy enforcement for state transitions.
//!
//! Rules inspect a [`TransitionContext`] and report every violation they
//! find. The game uses this for its attempt budget: a wrong guess that takes
//! the attempt count past the budget ends the round.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use mystery_number::enforcement::{EnforcementRules, TransitionContext};
//! use mystery_number::game::Screen;
//!
//! let rules = EnforcementRules::new().max_attempts(5);
//! let context = TransitionContext {
//!     from: Screen::Playing,
//!     to: Screen::Playing,
//!     attempt: 6,
//!     started_at: Utc::now(),
//! };
//!
//! assert!(rules.enforce(&context).is_err());
//! ```

pub mod context;
pub mod rules;
pub mod violations;

pub use context::TransitionContext;
pub use rules::EnforcementRules;
pub use violations::ViolationError;
