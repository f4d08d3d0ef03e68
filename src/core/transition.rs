//! Transition triples and machine configuration.

use super::label::{Action, State};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Side-effect callback registered for an action.
///
/// Invoked once per successful dispatch of that action with
/// `(new_state, previous_state)`. The result type `R` is caller-chosen.
pub type Handler<S, R> = Arc<dyn Fn(&S, &S) -> R + Send + Sync>;

/// Wrap a closure as a [`Handler`].
pub fn handler<S, R, F>(f: F) -> Handler<S, R>
where
    S: State,
    F: Fn(&S, &S) -> R + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Declared rule moving the machine from one state to another.
///
/// The configuration holds an ordered list of these; lookup scans in
/// declaration order and the first `(from, action)` match wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State, A: Action> {
    pub from: S,
    pub to: S,
    pub action: A,
}

impl<S: State, A: Action> Transition<S, A> {
    /// Create a transition triple.
    pub fn new(from: S, to: S, action: A) -> Self {
        Self { from, to, action }
    }

    /// Check whether this transition leaves the given state.
    pub fn applies_from(&self, state: &S) -> bool {
        self.from == *state
    }

    /// Check whether this transition is triggered by the given action.
    pub fn triggered_by(&self, action: &A) -> bool {
        self.action == *action
    }
}

/// Static configuration of a machine: the transition table plus the
/// per-action handler table.
///
/// Fields are public; no validation happens at construction time. Missing
/// handler entries are permitted and yield a no-op dispatch result. Use
/// [`crate::lint::check`] to surface configuration smells.
pub struct MachineConfig<S: State, A: Action, R = ()> {
    pub transitions: Vec<Transition<S, A>>,
    pub handlers: HashMap<A, Handler<S, R>>,
}

impl<S: State, A: Action, R> MachineConfig<S, A, R> {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            handlers: HashMap::new(),
        }
    }
}

impl<S: State, A: Action, R> Default for MachineConfig<S, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action, R> Clone for MachineConfig<S, A, R> {
    fn clone(&self) -> Self {
        Self {
            transitions: self.transitions.clone(),
            handlers: self
                .handlers
                .iter()
                .map(|(action, h)| (action.clone(), Arc::clone(h)))
                .collect(),
        }
    }
}
