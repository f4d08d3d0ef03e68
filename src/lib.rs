//! Flowstate: a typed transition-table state machine
//!
//! Flowstate executes a statically declared transition table over
//! caller-defined state and action label sets. State changes only occur
//! along declared transitions, and each action carries at most one
//! side-effect handler that observes `(new_state, previous_state)` on
//! every successful dispatch.
//!
//! # Core Concepts
//!
//! - **State** / **Action**: closed label domains via the `State` and
//!   `Action` traits, usually declared with [`state_enum!`] and
//!   [`action_enum!`]
//! - **Transition**: a declared `(from, to, action)` triple; lookup is a
//!   linear scan in declaration order, first match wins
//! - **Dispatch**: bind a `from` state with `for_state`, then apply an
//!   action; failures leave the active state untouched
//! - **History**: immutable record of every successful dispatch
//!
//! # Example
//!
//! ```rust
//! use flowstate::builder::MachineBuilder;
//! use flowstate::core::State;
//! use flowstate::{action_enum, state_enum};
//!
//! state_enum! {
//!     enum PlayerState {
//!         Idle,
//!         Running,
//!         Paused,
//!     }
//! }
//!
//! action_enum! {
//!     enum PlayerAction {
//!         Start,
//!         Pause,
//!     }
//! }
//!
//! let mut machine = MachineBuilder::<PlayerState, PlayerAction, String>::new()
//!     .initial(PlayerState::Idle)
//!     .transition(PlayerState::Idle, PlayerState::Running, PlayerAction::Start)
//!     .transition(PlayerState::Running, PlayerState::Paused, PlayerAction::Pause)
//!     .handler(PlayerAction::Start, |state, previous| {
//!         format!("{} -> {}", previous.name(), state.name())
//!     })
//!     .build()
//!     .unwrap();
//!
//! let result = machine
//!     .for_state(PlayerState::Idle)
//!     .unwrap()
//!     .dispatch(PlayerAction::Start)
//!     .unwrap();
//!
//! assert_eq!(result, Some("Idle -> Running".to_owned()));
//! assert!(machine.is(&PlayerState::Running));
//! assert!(machine.can(&PlayerAction::Pause));
//! ```

pub mod builder;
pub mod core;
pub mod lint;

// Re-export commonly used types
pub use crate::core::{
    Action, Dispatch, DispatchError, DispatchHistory, DispatchRecord, Handler, MachineConfig,
    State, StateMachine, Transition,
};
