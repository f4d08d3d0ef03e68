//! Configuration violations.

use thiserror::Error;

/// Findings reported by a configuration check.
///
/// Violations never affect dispatch behavior; they describe configurations
/// that are legal but likely unintended.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    /// A later transition shares a `(from, action)` pair with an earlier
    /// one and can never fire (first match wins).
    #[error("Transition from '{from}' on '{action}' is shadowed by an earlier declaration")]
    DuplicateTransition { from: String, action: String },

    /// An action appears in the transition table without a registered
    /// handler; dispatching it succeeds but yields no result.
    #[error("No handler registered for action '{action}'")]
    MissingHandler { action: String },

    /// A handler is registered for an action no transition uses.
    #[error("Handler for action '{action}' is never reachable from any transition")]
    UnusedHandler { action: String },

    /// The initial state has no outgoing transitions, so the machine can
    /// never leave it.
    #[error("Initial state '{state}' has no outgoing transitions")]
    TerminalInitialState { state: String },
}
