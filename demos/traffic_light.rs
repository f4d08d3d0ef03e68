//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - A single action driving every transition
//! - Querying capability with can()
//!
//! Run with: cargo run --example traffic_light

use flowstate::builder::MachineBuilder;
use flowstate::core::State;
use flowstate::{action_enum, state_enum};

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
}

action_enum! {
    enum LightAction {
        Advance,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine = MachineBuilder::<TrafficLight, LightAction, ()>::new()
        .initial(TrafficLight::Red)
        .transition(TrafficLight::Red, TrafficLight::Green, LightAction::Advance)
        .transition(TrafficLight::Green, TrafficLight::Yellow, LightAction::Advance)
        .transition(TrafficLight::Yellow, TrafficLight::Red, LightAction::Advance)
        .build()
        .unwrap();

    println!("Initial state: {}", machine.current_state().name());
    println!("Can advance: {}\n", machine.can(&LightAction::Advance));

    println!("Cycling twice around:");
    for _ in 0..6 {
        let current = machine.current_state().clone();
        machine
            .for_state(current)
            .unwrap()
            .dispatch(LightAction::Advance)
            .unwrap();
        println!("  -> {}", machine.current_state().name());
    }

    println!("\nThis is a cyclic machine - no state is terminal:");
    println!("  is_terminal: {}", machine.is_terminal());

    println!("\n=== Example Complete ===");
}
