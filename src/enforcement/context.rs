//! Context provided to enforcement checks.

use crate::core::State;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Snapshot of a pending step, handed to [`EnforcementRules`](super::EnforcementRules).
#[derive(Clone, Debug)]
pub struct TransitionContext<S: State> {
    pub from: S,
    pub to: S,
    /// Attempts used so far, including the one being checked
    pub attempt: usize,
    pub started_at: DateTime<Utc>,
}

impl<S: State> TransitionContext<S> {
    /// Time since the source state was entered
    pub fn elapsed(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Screen;

    #[test]
    fn elapsed_measures_from_start() {
        let context = TransitionContext {
            from: Screen::Playing,
            to: Screen::Playing,
            attempt: 1,
            started_at: Utc::now() - chrono::Duration::seconds(3),
        };

        assert!(context.elapsed() >= Duration::from_secs(3));
    }

    #[test]
    fn elapsed_never_goes_negative() {
        let context = TransitionContext {
            from: Screen::Playing,
            to: Screen::Playing,
            attempt: 1,
            started_at: Utc::now() + chrono::Duration::seconds(60),
        };

        assert_eq!(context.elapsed(), Duration::ZERO);
    }
}
