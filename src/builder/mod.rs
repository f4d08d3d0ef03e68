//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and declaration macros for
//! creating state machines with minimal boilerplate while maintaining
//! type safety.
//!
//! # Example
//!
//! ```
//! use flowstate::builder::MachineBuilder;
//! use flowstate::{action_enum, state_enum};
//!
//! state_enum! {
//!     enum DoorState {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! action_enum! {
//!     enum DoorAction {
//!         Open,
//!         Close,
//!     }
//! }
//!
//! let machine = MachineBuilder::<DoorState, DoorAction, ()>::new()
//!     .initial(DoorState::Closed)
//!     .transition(DoorState::Closed, DoorState::Open, DoorAction::Open)
//!     .transition(DoorState::Open, DoorState::Closed, DoorAction::Close)
//!     .build()
//!     .unwrap();
//!
//! assert!(machine.can(&DoorAction::Open));
//! ```

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
