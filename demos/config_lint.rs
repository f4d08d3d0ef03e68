//! Configuration Lint
//!
//! This example demonstrates the opt-in diagnostics pass over a machine
//! configuration.
//!
//! Key concepts:
//! - Dispatch keeps first-match semantics for duplicate pairs
//! - lint::check accumulates every finding instead of failing fast
//!
//! Run with: cargo run --example config_lint

use flowstate::core::{handler, MachineConfig, StateMachine, Transition};
use flowstate::lint;
use flowstate::{action_enum, state_enum};

state_enum! {
    enum JobState {
        Queued,
        Active,
        Done,
    }
}

action_enum! {
    enum JobAction {
        Claim,
        Finish,
        Cancel,
    }
}

fn main() {
    println!("=== Configuration Lint ===\n");

    let mut config: MachineConfig<JobState, JobAction, ()> = MachineConfig::new();
    config.transitions = vec![
        Transition::new(JobState::Queued, JobState::Active, JobAction::Claim),
        // Shadowed: same (from, action) pair as the previous entry
        Transition::new(JobState::Queued, JobState::Done, JobAction::Claim),
        Transition::new(JobState::Active, JobState::Done, JobAction::Finish),
    ];
    config.handlers.insert(JobAction::Claim, handler(|_, _| ()));
    // Cancel has a handler but no transition uses it
    config.handlers.insert(JobAction::Cancel, handler(|_, _| ()));

    println!("Findings for a machine starting at Queued:");
    for violation in lint::check(&JobState::Queued, &config) {
        println!("  - {violation}");
    }

    println!("\nLint does not change behavior - first match still wins:");
    let mut machine = StateMachine::new(JobState::Queued, config);
    machine
        .for_state(JobState::Queued)
        .unwrap()
        .dispatch(JobAction::Claim)
        .unwrap();
    println!("  Claim from Queued lands in {:?}", machine.current_state());

    println!("\n=== Example Complete ===");
}
