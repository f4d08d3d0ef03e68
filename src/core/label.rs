//! Label traits for state machine domains.
//!
//! A machine is generic over two closed label sets: the states it can
//! occupy and the actions that may move it. Both are caller-defined enums
//! implementing the traits below, which gives the closed-set guarantee at
//! the type level.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state labels.
///
/// Exactly one state is active at any time; states are immutable values
/// that describe the current position in a machine.
///
/// # Required Traits
///
/// - `Clone`: states are captured into dispatch records
/// - `PartialEq`: transition lookup compares states
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable
///
/// # Example
///
/// ```rust
/// use flowstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum PlayerState {
///     Idle,
///     Running,
///     Paused,
/// }
///
/// impl State for PlayerState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Running => "Running",
///             Self::Paused => "Paused",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display and error reporting.
    fn name(&self) -> &str;
}

/// Trait for action labels.
///
/// Actions are the events that may trigger a transition. In addition to
/// the `State` bounds they require `Eq + Hash`, because the handler table
/// is a map keyed by action.
///
/// # Example
///
/// ```rust
/// use flowstate::core::Action;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum PlayerAction {
///     Start,
///     Pause,
///     Resume,
///     Stop,
/// }
///
/// impl Action for PlayerAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Pause => "Pause",
///             Self::Resume => "Resume",
///             Self::Stop => "Stop",
///         }
///     }
/// }
/// ```
pub trait Action:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the action's name for display and error reporting.
    fn name(&self) -> &str;
}
