//! Core state machine types and logic.
//!
//! This module contains the machine itself and the data it runs on:
//! - Label domains via the `State` and `Action` traits
//! - Transition triples and the machine configuration
//! - The transition-table executor and its bound dispatcher
//! - Dispatch history tracking

mod history;
mod label;
mod machine;
mod transition;

pub use history::{DispatchHistory, DispatchRecord};
pub use label::{Action, State};
pub use machine::{Dispatch, DispatchError, StateMachine};
pub use transition::{handler, Handler, MachineConfig, Transition};
