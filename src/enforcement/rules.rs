//! Enforcement rules for state transitions.

use crate::core::State;
use crate::enforcement::context::TransitionContext;
use crate::enforcement::violations::ViolationError;

/// Policy checked before a step is allowed to keep the machine where it is.
///
/// All violations are collected rather than stopping at the first one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnforcementRules {
    max_attempts: Option<usize>,
}

impl EnforcementRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow at most `n` attempts; attempt `n + 1` is a violation.
    pub fn max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = Some(n);
        self
    }

    pub fn attempt_limit(&self) -> Option<usize> {
        self.max_attempts
    }

    /// Check every rule against `context`.
    pub fn enforce<S: State>(
        &self,
        context: &TransitionContext<S>,
    ) -> Result<(), Vec<ViolationError>> {
        let mut violations = Vec::new();

        if let Some(max) = self.max_attempts {
            if context.attempt > max {
                violations.push(ViolationError::MaxAttemptsExceeded {
                    max,
                    current: context.attempt,
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
