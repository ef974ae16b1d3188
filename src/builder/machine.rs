//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::State;
use crate::machine::{StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<S: State> {
    initial: Option<S>,
    transitions: Vec<Transition<S>>,
}

impl<S: State> StateMachineBuilder<S> {
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn transitions(mut self, transitions: Vec<Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    ///
    /// Fails without an initial state, with an empty table, or when the same
    /// edge is declared twice.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        for (i, transition) in self.transitions.iter().enumerate() {
            let duplicate = self.transitions[..i]
                .iter()
                .any(|t| t.from == transition.from && t.to == transition.to);
            if duplicate {
                return Err(BuildError::DuplicateTransition {
                    from: transition.from.name().to_string(),
                    to: transition.to.name().to_string(),
                });
            }
        }

        let mut machine = StateMachine::new(initial);
        for transition in self.transitions {
            machine.add_transition(transition);
        }

        Ok(machine)
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
