//! The `State` trait implemented by every screen the game can show.
//!
//! States are plain values: inspecting them never has side effects, which
//! keeps the controller's transition logic easy to test.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: the machine matches states against its transition table
/// - `Debug`: states show up in log lines
/// - `Serialize` + `Deserialize`: the history can be dumped as JSON
///
/// Most states are declared with [`state_enum!`](crate::state_enum) rather
/// than by implementing this trait by hand.
///
/// # Example
///
/// ```rust
/// use mystery_number::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Closed,
///     Open,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Open)
///     }
/// }
///
/// assert_eq!(Door::Closed.name(), "Closed");
/// assert!(Door::Open.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in log lines and transition errors.
    fn name(&self) -> &str;

    /// Whether this state ends a round.
    ///
    /// A final state may still have outgoing transitions (the end screen can
    /// go back to the menu); it only marks the point where the current round
    /// is decided.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
