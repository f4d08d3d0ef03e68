//! Dispatch history tracking.
//!
//! Every successful dispatch appends a record of which transition fired.
//! The history is an immutable in-memory value: `record` returns a new
//! history and never mutates the existing one.

use super::label::{Action, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful dispatch.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: State, A: Action> {
    /// The state that was active before the dispatch
    pub from: S,
    /// The state the machine moved to
    pub to: S,
    /// The action that triggered the transition
    pub action: A,
    /// When the dispatch occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of successful dispatches.
///
/// # Example
///
/// ```rust
/// use flowstate::core::{Action, DispatchHistory, DispatchRecord, State};
/// use chrono::Utc;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase { One, Two }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "One",
///             Self::Two => "Two",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Step { Advance }
///
/// impl Action for Step {
///     fn name(&self) -> &str { "Advance" }
/// }
///
/// let history = DispatchHistory::new();
/// let history = history.record(DispatchRecord {
///     from: Phase::One,
///     to: Phase::Two,
///     action: Step::Advance,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![&Phase::One, &Phase::Two]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchHistory<S: State, A: Action> {
    records: Vec<DispatchRecord<S, A>>,
}

impl<S: State, A: Action> Default for DispatchHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> DispatchHistory<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a dispatch, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, record: DispatchRecord<S, A>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get all records in dispatch order.
    pub fn records(&self) -> &[DispatchRecord<S, A>] {
        &self.records
    }

    /// Get the most recent record, if any.
    pub fn last(&self) -> Option<&DispatchRecord<S, A>> {
        self.records.last()
    }

    /// Get the path of states traversed: the first record's `from`
    /// followed by the `to` of every record.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time between the first and last record.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
        Paused,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Paused => "Paused",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestAction {
        Start,
        Pause,
    }

    impl Action for TestAction {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Pause => "Pause",
            }
        }
    }

    fn record(from: TestState, to: TestState, action: TestAction) -> DispatchRecord<TestState, TestAction> {
        DispatchRecord {
            from,
            to,
            action,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: DispatchHistory<TestState, TestAction> = DispatchHistory::new();
        assert!(history.records().is_empty());
        assert!(history.path().is_empty());
        assert!(history.last().is_none());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = DispatchHistory::new();

        let new_history =
            history.record(record(TestState::Idle, TestState::Running, TestAction::Start));

        assert_eq!(history.records().len(), 0);
        assert_eq!(new_history.records().len(), 1);
    }

    #[test]
    fn path_returns_state_sequence() {
        let history = DispatchHistory::new()
            .record(record(TestState::Idle, TestState::Running, TestAction::Start))
            .record(record(
                TestState::Running,
                TestState::Paused,
                TestAction::Pause,
            ));

        let path = history.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Idle);
        assert_eq!(path[1], &TestState::Running);
        assert_eq!(path[2], &TestState::Paused);
    }

    #[test]
    fn last_returns_most_recent_record() {
        let history = DispatchHistory::new()
            .record(record(TestState::Idle, TestState::Running, TestAction::Start))
            .record(record(
                TestState::Running,
                TestState::Paused,
                TestAction::Pause,
            ));

        let last = history.last().unwrap();
        assert_eq!(last.action, TestAction::Pause);
        assert_eq!(last.to, TestState::Paused);
    }

    #[test]
    fn single_record_has_duration_zero() {
        let history =
            DispatchHistory::new().record(record(TestState::Idle, TestState::Running, TestAction::Start));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_roundtrips_through_serde() {
        let history = DispatchHistory::new()
            .record(record(TestState::Idle, TestState::Running, TestAction::Start));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: DispatchHistory<TestState, TestAction> =
            serde_json::from_str(&json).unwrap();

        assert_eq!(history.records().len(), deserialized.records().len());
        assert_eq!(deserialized.records()[0].from, TestState::Idle);
    }
}
