//! Transition-table executor.

use super::history::{DispatchHistory, DispatchRecord};
use super::label::{Action, State};
use super::transition::MachineConfig;
use chrono::Utc;
use std::fmt;
use thiserror::Error;

/// Errors raised by transition lookup and dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No transitions defined for state '{state}'")]
    NoTransitionsForState { state: String },

    #[error("No transition found for state '{state}' with action '{action}'")]
    NoMatchingTransition { state: String, action: String },
}

/// Transition-table state machine.
///
/// Holds the active state and a static [`MachineConfig`]. State changes
/// only occur along declared transitions, via [`StateMachine::for_state`]
/// followed by [`Dispatch::dispatch`]. A successful dispatch updates the
/// active state before invoking the action's handler, so the handler
/// observes `(new_state, previous_state)`.
///
/// Transition lookup is a linear scan in declaration order; with duplicate
/// `(from, action)` pairs the first match wins.
///
/// # Example
///
/// ```rust
/// use flowstate::builder::MachineBuilder;
/// use flowstate::{action_enum, state_enum};
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// action_enum! {
///     enum Signal {
///         Go,
///         Halt,
///     }
/// }
///
/// let mut machine = MachineBuilder::<Light, Signal, ()>::new()
///     .initial(Light::Red)
///     .transition(Light::Red, Light::Green, Signal::Go)
///     .transition(Light::Green, Light::Red, Signal::Halt)
///     .build()
///     .unwrap();
///
/// assert!(machine.can(&Signal::Go));
/// machine.for_state(Light::Red).unwrap().dispatch(Signal::Go).unwrap();
/// assert!(machine.is(&Light::Green));
/// ```
pub struct StateMachine<S: State, A: Action, R = ()> {
    current: S,
    config: MachineConfig<S, A, R>,
    history: DispatchHistory<S, A>,
}

impl<S: State, A: Action, R> StateMachine<S, A, R> {
    /// Create a machine in the given initial state.
    ///
    /// The configuration is taken as-is; nothing checks that the initial
    /// state has outgoing transitions or that every `from` state is
    /// reachable. Those conditions surface at query and dispatch time.
    pub fn new(initial: S, config: MachineConfig<S, A, R>) -> Self {
        Self {
            current: initial,
            config,
            history: DispatchHistory::new(),
        }
    }

    /// Get the active state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check whether the active state equals the given state.
    pub fn is(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Check whether a declared transition leaves the active state under
    /// the given action.
    ///
    /// Consults only the transition table, never the handler table.
    pub fn can(&self, action: &A) -> bool {
        self.config
            .transitions
            .iter()
            .any(|t| t.applies_from(&self.current) && t.triggered_by(action))
    }

    /// Check whether the active state has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        !self
            .config
            .transitions
            .iter()
            .any(|t| t.applies_from(&self.current))
    }

    /// Bind a dispatcher to the given `from` state.
    ///
    /// The bound state need not be the active state; looking up transitions
    /// for an arbitrary state is deliberate. Fails with
    /// [`DispatchError::NoTransitionsForState`] when the table declares no
    /// transition leaving that state.
    pub fn for_state(&mut self, state: S) -> Result<Dispatch<'_, S, A, R>, DispatchError> {
        if !self.config.transitions.iter().any(|t| t.applies_from(&state)) {
            return Err(DispatchError::NoTransitionsForState {
                state: state.name().to_owned(),
            });
        }

        Ok(Dispatch {
            machine: self,
            from: state,
        })
    }

    /// Get the dispatch history.
    pub fn history(&self) -> &DispatchHistory<S, A> {
        &self.history
    }

    /// Get the configuration.
    pub fn config(&self) -> &MachineConfig<S, A, R> {
        &self.config
    }
}

/// Dispatcher bound to a `from` state by [`StateMachine::for_state`].
///
/// Holds a mutable borrow of the machine, so handlers can never re-enter
/// the machine that invoked them.
pub struct Dispatch<'m, S: State, A: Action, R> {
    machine: &'m mut StateMachine<S, A, R>,
    from: S,
}

impl<S: State, A: Action, R> fmt::Debug for Dispatch<'_, S, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl<S: State, A: Action, R> Dispatch<'_, S, A, R> {
    /// Apply an action from the bound state.
    ///
    /// Scans the transitions declared for the bound state and fires the
    /// first one matching the action. The previous state reported to the
    /// handler is the state that was active at dispatch time, which only
    /// differs from the bound state when the dispatcher was bound to a
    /// non-active state.
    ///
    /// On success the handler's result is returned as `Some`, or `None`
    /// when no handler is registered for the action. On failure the active
    /// state is left unchanged.
    pub fn dispatch(&mut self, action: A) -> Result<Option<R>, DispatchError> {
        let to = self
            .machine
            .config
            .transitions
            .iter()
            .filter(|t| t.applies_from(&self.from))
            .find(|t| t.triggered_by(&action))
            .map(|t| t.to.clone())
            .ok_or_else(|| DispatchError::NoMatchingTransition {
                state: self.from.name().to_owned(),
                action: action.name().to_owned(),
            })?;

        let previous = std::mem::replace(&mut self.machine.current, to);

        self.machine.history = self.machine.history.record(DispatchRecord {
            from: previous.clone(),
            to: self.machine.current.clone(),
            action: action.clone(),
            timestamp: Utc::now(),
        });

        Ok(self
            .machine
            .config
            .handlers
            .get(&action)
            .map(|handler| handler(&self.machine.current, &previous)))
    }
}
