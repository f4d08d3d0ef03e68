//! Opt-in diagnostics for machine configurations.
//!
//! [`StateMachine::new`](crate::core::StateMachine::new) performs no
//! validation, and dispatch preserves first-match semantics for duplicate
//! `(from, action)` pairs. This module is the place those configuration
//! smells surface: [`check`] inspects a configuration and accumulates
//! *all* findings instead of stopping at the first one.
//!
//! # Example
//!
//! ```
//! use flowstate::core::{MachineConfig, Transition};
//! use flowstate::lint::{self, Violation};
//! use flowstate::{action_enum, state_enum};
//!
//! state_enum! {
//!     enum Phase {
//!         Queued,
//!         Active,
//!     }
//! }
//!
//! action_enum! {
//!     enum Op {
//!         Claim,
//!     }
//! }
//!
//! let mut config: MachineConfig<Phase, Op, ()> = MachineConfig::new();
//! config.transitions.push(Transition::new(Phase::Queued, Phase::Active, Op::Claim));
//!
//! let findings = lint::check(&Phase::Queued, &config);
//! assert_eq!(
//!     findings,
//!     vec![Violation::MissingHandler { action: "Claim".into() }],
//! );
//! ```

pub mod violations;

pub use violations::Violation;

use crate::core::{Action, MachineConfig, State};
use std::collections::HashSet;

/// Check a configuration against an initial state, accumulating all
/// violations in a stable order: shadowed duplicates first, then handler
/// findings, then the terminal-initial-state check.
pub fn check<S: State, A: Action, R>(
    initial: &S,
    config: &MachineConfig<S, A, R>,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (i, transition) in config.transitions.iter().enumerate() {
        let shadowed = config.transitions[..i]
            .iter()
            .any(|earlier| earlier.from == transition.from && earlier.action == transition.action);
        if shadowed {
            violations.push(Violation::DuplicateTransition {
                from: transition.from.name().to_owned(),
                action: transition.action.name().to_owned(),
            });
        }
    }

    let mut reported: HashSet<A> = HashSet::new();
    for transition in &config.transitions {
        if !config.handlers.contains_key(&transition.action)
            && reported.insert(transition.action.clone())
        {
            violations.push(Violation::MissingHandler {
                action: transition.action.name().to_owned(),
            });
        }
    }

    for action in config.handlers.keys() {
        let used = config.transitions.iter().any(|t| t.triggered_by(action));
        if !used {
            violations.push(Violation::UnusedHandler {
                action: action.name().to_owned(),
            });
        }
    }

    if !config.transitions.iter().any(|t| t.applies_from(initial)) {
        violations.push(Violation::TerminalInitialState {
            state: initial.name().to_owned(),
        });
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{handler, Transition};
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
        Stop,
    }

    impl Action for TestAction {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Pause => "Pause",
                Self::Stop => "Stop",
            }
        }
    }

    fn config_with(
        transitions: Vec<Transition<TestState, TestAction>>,
        handled: Vec<TestAction>,
    ) -> MachineConfig<TestState, TestAction, ()> {
        let mut config = MachineConfig::new();
        config.transitions = transitions;
        for action in handled {
            config.handlers.insert(action, handler(|_, _| ()));
        }
        config
    }

    #[test]
    fn clean_config_has_no_violations() {
        let config = config_with(
            vec![
                Transition::new(TestState::Idle, TestState::Running, TestAction::Start),
                Transition::new(TestState::Running, TestState::Idle, TestAction::Stop),
            ],
            vec![TestAction::Start, TestAction::Stop],
        );

        assert!(check(&TestState::Idle, &config).is_empty());
    }

    #[test]
    fn duplicate_pair_is_reported_once_per_shadowed_entry() {
        let config = config_with(
            vec![
                Transition::new(TestState::Idle, TestState::Running, TestAction::Start),
                Transition::new(TestState::Idle, TestState::Paused, TestAction::Start),
                Transition::new(TestState::Idle, TestState::Idle, TestAction::Start),
            ],
            vec![TestAction::Start],
        );

        let violations = check(&TestState::Idle, &config);
        let duplicates: Vec<_> = violations
            .iter()
            .filter(|v| matches!(v, Violation::DuplicateTransition { .. }))
            .collect();

        assert_eq!(duplicates.len(), 2);
    }

    #[test]
    fn missing_handler_reported_once_per_action() {
        let config = config_with(
            vec![
                Transition::new(TestState::Idle, TestState::Running, TestAction::Start),
                Transition::new(TestState::Paused, TestState::Running, TestAction::Start),
            ],
            vec![],
        );

        let violations = check(&TestState::Idle, &config);

        assert_eq!(
            violations,
            vec![Violation::MissingHandler {
                action: "Start".to_owned(),
            }],
        );
    }

    #[test]
    fn unused_handler_is_reported() {
        let config = config_with(
            vec![Transition::new(
                TestState::Idle,
                TestState::Running,
                TestAction::Start,
            )],
            vec![TestAction::Start, TestAction::Pause],
        );

        let violations = check(&TestState::Idle, &config);

        assert!(violations.contains(&Violation::UnusedHandler {
            action: "Pause".to_owned(),
        }));
    }

    #[test]
    fn terminal_initial_state_is_reported() {
        let config = config_with(
            vec![Transition::new(
                TestState::Idle,
                TestState::Running,
                TestAction::Start,
            )],
            vec![TestAction::Start],
        );

        let violations = check(&TestState::Paused, &config);

        assert_eq!(
            violations,
            vec![Violation::TerminalInitialState {
                state: "Paused".to_owned(),
            }],
        );
    }

    #[test]
    fn violations_accumulate() {
        let config = config_with(
            vec![
                Transition::new(TestState::Idle, TestState::Running, TestAction::Start),
                Transition::new(TestState::Idle, TestState::Paused, TestAction::Start),
            ],
            vec![TestAction::Stop],
        );

        let violations = check(&TestState::Running, &config);

        assert_eq!(violations.len(), 4);
        assert!(violations.contains(&Violation::DuplicateTransition {
            from: "Idle".to_owned(),
            action: "Start".to_owned(),
        }));
        assert!(violations.contains(&Violation::MissingHandler {
            action: "Start".to_owned(),
        }));
        assert!(violations.contains(&Violation::UnusedHandler {
            action: "Stop".to_owned(),
        }));
        assert!(violations.contains(&Violation::TerminalInitialState {
            state: "Running".to_owned(),
        }));
    }
}
