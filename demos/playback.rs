//! Playback State Machine
//!
//! This example demonstrates dispatching actions with per-action handlers.
//!
//! Key concepts:
//! - Transition table declared up front
//! - One handler per action, observing (new, previous) state
//! - Rejected dispatches leave the machine untouched
//!
//! Run with: cargo run --example playback

use flowstate::builder::MachineBuilder;
use flowstate::core::State;
use flowstate::{action_enum, state_enum};

state_enum! {
    enum PlayerState {
        Idle,
        Running,
        Paused,
    }
}

action_enum! {
    enum PlayerAction {
        Start,
        Pause,
        Resume,
        Stop,
    }
}

fn announce(action: &str) -> impl Fn(&PlayerState, &PlayerState) + Send + Sync + 'static {
    let action = action.to_owned();
    move |state, previous| {
        println!("  {}: {} -> {}", action, previous.name(), state.name());
    }
}

fn main() {
    println!("=== Playback State Machine ===\n");

    let mut machine = MachineBuilder::<PlayerState, PlayerAction, ()>::new()
        .initial(PlayerState::Idle)
        .transition(PlayerState::Idle, PlayerState::Running, PlayerAction::Start)
        .transition(PlayerState::Running, PlayerState::Paused, PlayerAction::Pause)
        .transition(PlayerState::Paused, PlayerState::Running, PlayerAction::Resume)
        .transition(PlayerState::Running, PlayerState::Idle, PlayerAction::Stop)
        .handler(PlayerAction::Start, announce("start"))
        .handler(PlayerAction::Pause, announce("pause"))
        .handler(PlayerAction::Resume, announce("resume"))
        .handler(PlayerAction::Stop, announce("stop"))
        .build()
        .unwrap();

    println!("Initial state: {}\n", machine.current_state().name());

    println!("Dispatching start, pause:");
    machine
        .for_state(PlayerState::Idle)
        .unwrap()
        .dispatch(PlayerAction::Start)
        .unwrap();
    machine
        .for_state(PlayerState::Running)
        .unwrap()
        .dispatch(PlayerAction::Pause)
        .unwrap();

    // Start is not declared for Paused
    println!("\nDispatching start while paused:");
    match machine
        .for_state(PlayerState::Paused)
        .unwrap()
        .dispatch(PlayerAction::Start)
    {
        Ok(_) => println!("  unexpected success"),
        Err(err) => println!("  rejected: {err}"),
    }
    println!("  state is still {}", machine.current_state().name());

    println!("\nDispatching resume, stop:");
    machine
        .for_state(PlayerState::Paused)
        .unwrap()
        .dispatch(PlayerAction::Resume)
        .unwrap();
    machine
        .for_state(PlayerState::Running)
        .unwrap()
        .dispatch(PlayerAction::Stop)
        .unwrap();

    let path: Vec<&str> = machine.history().path().iter().map(|s| s.name()).collect();
    println!("\nPath traversed: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
}
