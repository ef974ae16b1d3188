//! State machine that applies step outcomes against a declared transition table.

use crate::core::{State, StateHistory, StateTransition};
use crate::machine::transition::{Transition, TransitionError, TransitionResult};
use chrono::Utc;

/// What happened when a `TransitionResult` was applied
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S: State> {
    /// Moved to a new state
    Transitioned(S),

    /// Stayed in the current state; `attempts` counts retries since entering it
    Retry { feedback: String, attempts: usize },

    /// Moved to `error_state` after giving up
    Aborted { reason: String, error_state: S },
}

/// Synchronous state machine with a fixed transition table.
pub struct StateMachine<S: State> {
    current: S,
    transitions: Vec<Transition<S>>,
    history: StateHistory<S>,
    attempt_count: usize,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in the initial state with no transitions declared
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            transitions: Vec::new(),
            history: StateHistory::new(),
            attempt_count: 0,
        }
    }

    pub fn add_transition(&mut self, transition: Transition<S>) {
        self.transitions.push(transition);
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Retries recorded since the current state was entered
    pub fn attempt_count(&self) -> usize {
        self.attempt_count
    }

    /// Whether the table has an edge from the current state to `target`
    pub fn can_transition_to(&self, target: &S) -> bool {
        self.transitions
            .iter()
            .any(|t| t.can_execute(&self.current, target))
    }

    /// Move to `target` if the table allows it, recording the transition.
    pub fn transition_to(&mut self, target: S) -> Result<(), TransitionError> {
        if !self.can_transition_to(&target) {
            return Err(TransitionError::NoTransition {
                from: self.current.name().to_string(),
                to: target.name().to_string(),
            });
        }

        let from = std::mem::replace(&mut self.current, target.clone());
        self.history = self.history.record(StateTransition {
            from,
            to: target,
            timestamp: Utc::now(),
            attempt: self.attempt_count + 1,
        });
        self.attempt_count = 0;
        Ok(())
    }

    /// Apply the outcome of one step of game logic.
    ///
    /// On error the machine is left unchanged.
    pub fn apply(&mut self, result: TransitionResult<S>) -> Result<StepResult<S>, TransitionError> {
        match result {
            TransitionResult::Success(target) => {
                self.transition_to(target.clone())?;
                Ok(StepResult::Transitioned(target))
            }
            TransitionResult::Retry { feedback, .. } => {
                self.attempt_count += 1;
                Ok(StepResult::Retry {
                    feedback,
                    attempts: self.attempt_count,
                })
            }
            TransitionResult::Abort {
                reason,
                error_state,
            } => {
                self.transition_to(error_state.clone())?;
                Ok(StepResult::Aborted {
                    reason,
                    error_state,
                })
            }
        }
    }
}
