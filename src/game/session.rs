//! One round of play: a secret, a budget and the guesses made so far.

use crate::enforcement::{EnforcementRules, TransitionContext};
use crate::game::difficulty::Difficulty;
use crate::game::screen::Screen;
use crate::game::secret::SecretSource;
use crate::machine::TransitionResult;
use chrono::{DateTime, Utc};
use log::debug;
use std::cmp::Ordering;
use std::time::Duration;
use uuid::Uuid;

/// "1 attempt", "3 attempts".
pub fn attempts_label(n: u32) -> String {
    if n == 1 {
        "1 attempt".to_string()
    } else {
        format!("{} attempts", n)
    }
}

/// State of the round in progress.
///
/// The secret is drawn once in [`Session::start`] and never changes;
/// `attempts_used` only grows.
#[derive(Clone, Debug)]
pub struct Session {
    id: Uuid,
    difficulty: Difficulty,
    secret: u32,
    attempts_used: u32,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn start<R: SecretSource + ?Sized>(difficulty: Difficulty, source: &mut R) -> Self {
        Self {
            id: Uuid::new_v4(),
            difficulty,
            secret: source.draw(difficulty.range),
            attempts_used: 0,
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Budget rule for this round: the attempt after the last allowed one loses.
    pub fn rules(&self) -> EnforcementRules {
        EnforcementRules::new().max_attempts(self.difficulty.attempt_budget as usize)
    }

    pub fn elapsed(&self) -> Duration {
        self.context().elapsed()
    }

    /// Score an in-range guess.
    ///
    /// The attempt is counted first. A correct guess wins even if it is past
    /// the budget; only a wrong guess is checked against the budget.
    pub fn evaluate(&mut self, guess: u32) -> TransitionResult<Screen> {
        self.attempts_used += 1;

        let feedback = match guess.cmp(&self.secret) {
            Ordering::Equal => return TransitionResult::Success(Screen::End),
            Ordering::Less => "Go higher!",
            Ordering::Greater => "Go lower!",
        };

        match self.rules().enforce(&self.context()) {
            Ok(()) => TransitionResult::Retry {
                feedback: feedback.to_string(),
                current_state: Screen::Playing,
            },
            Err(violations) => {
                debug!("session {}: budget exhausted: {:?}", self.id, violations);
                TransitionResult::Abort {
                    reason: self.loss_message(),
                    error_state: Screen::End,
                }
            }
        }
    }

    pub fn win_message(&self) -> String {
        format!(
            "Correct! You found it in {}.",
            attempts_label(self.attempts_used)
        )
    }

    pub fn loss_message(&self) -> String {
        format!("Out of attempts! The number was {}.", self.secret)
    }

    fn context(&self) -> TransitionContext<Screen> {
        TransitionContext {
            from: Screen::Playing,
            to: Screen::Playing,
            attempt: self.attempts_used as usize,
            started_at: self.started_at,
        }
    }
}
