//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{handler, Action, MachineConfig, State, StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// Unlike [`StateMachine::new`], which accepts any configuration, the
/// builder requires an initial state and at least one transition.
pub struct MachineBuilder<S: State, A: Action, R = ()> {
    initial: Option<S>,
    config: MachineConfig<S, A, R>,
}

impl<S: State, A: Action, R> MachineBuilder<S, A, R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            config: MachineConfig::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a transition from `from` to `to` under `action`.
    pub fn transition(mut self, from: S, to: S, action: A) -> Self {
        self.config.transitions.push(Transition::new(from, to, action));
        self
    }

    /// Add multiple pre-built transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, A>>) -> Self {
        self.config.transitions.extend(transitions);
        self
    }

    /// Register the handler invoked on every successful dispatch of
    /// `action`. A later registration for the same action replaces the
    /// earlier one.
    pub fn handler<F>(mut self, action: A, f: F) -> Self
    where
        F: Fn(&S, &S) -> R + Send + Sync + 'static,
    {
        self.config.handlers.insert(action, handler(f));
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine<S, A, R>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.config.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(StateMachine::new(initial, self.config))
    }
}

impl<S: State, A: Action, R> Default for MachineBuilder<S, A, R> {
    fn default() -> Self {
        Self::new()
    }
}
