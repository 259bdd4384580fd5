//! Traffic Light State Machine
//!
//! This demo drives a cyclic machine through events, then walks its
//! history backwards and forwards.
//!
//! Key concepts:
//! - Event-driven transitions from a declarative table
//! - Direct jumps that bypass the table
//! - Undo/redo and the discarded redo branch
//!
//! Run with: cargo run --example traffic_light

use rewind_fsm::builder::StateMachineBuilder;
use rewind_fsm::core::{Event, State};
use rewind_fsm::{event_enum, state_enum, FsmError};

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
        Flashing,
    }
}

event_enum! {
    enum Signal {
        Timer,
        Fault,
        Repair,
    }
}

fn main() -> Result<(), FsmError> {
    println!("=== Traffic Light State Machine ===\n");

    let mut light = StateMachineBuilder::<TrafficLight, Signal>::new()
        .transition(TrafficLight::Red, Signal::Timer, TrafficLight::Green)
        .transition(TrafficLight::Green, Signal::Timer, TrafficLight::Yellow)
        .transition(TrafficLight::Yellow, Signal::Timer, TrafficLight::Red)
        .transition(TrafficLight::Flashing, Signal::Repair, TrafficLight::Red)
        .initial(TrafficLight::Red)
        .eager()
        .build()?;

    println!("Initial state: {}", light.current_state().name());

    for _ in 0..4 {
        light.trigger(&Signal::Timer)?;
        println!("  Timer  -> {}", light.current_state().name());
    }

    if let Err(e) = light.trigger(&Signal::Fault) {
        println!("  Fault  -> rejected: {e}");
    }

    light.change_state(&TrafficLight::Flashing)?;
    println!("  Jump   -> {}", light.current_state().name());

    println!("\nWalking back through history:");
    while light.undo() {
        println!("  undo   -> {}", light.current_state().name());
    }

    light.redo();
    println!("  redo   -> {}", light.current_state().name());

    light.trigger(&Signal::Timer)?;
    println!("  Timer  -> {}", light.current_state().name());
    println!("  redo available: {}", light.can_redo());

    let repairable: Vec<&str> = light
        .states(Some(&Signal::Repair))
        .into_iter()
        .map(|state| state.name())
        .collect();
    println!(
        "\nStates accepting {}: {:?}",
        Signal::Repair.name(),
        repairable
    );
    println!("Timeline: {}", light.history().path().join(" -> "));

    println!("\n=== Demo Complete ===");
    Ok(())
}
