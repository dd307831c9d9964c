//! Modulo-Three Machine
//!
//! This example evaluates binary numbers with a three-state machine whose
//! final state is the value of the number modulo three.
//!
//! Key concepts:
//! - Typed states via the `state_enum!` macro
//! - Fluent construction with `MachineBuilder`
//! - Evaluation verdicts and run traces
//!
//! Run with: RUST_LOG=dfsm=trace cargo run --example mod_three

use dfsm::core::State;
use dfsm::{state_enum, MachineBuilder};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Remainder {
        Zero,
        One,
        Two,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Modulo-Three Machine ===\n");

    use Remainder::*;
    let machine = MachineBuilder::<Remainder>::new()
        .states([Zero, One, Two])
        .alphabet(['0', '1'])
        .initial(Zero)
        .accepting([Zero, One, Two])
        .transition(Zero, '0', Zero)
        .transition(Zero, '1', One)
        .transition(One, '0', Two)
        .transition(One, '1', Zero)
        .transition(Two, '0', One)
        .transition(Two, '1', Two)
        .build()
        .unwrap();

    for input in ["110", "1010", "1000", "", "012"] {
        match machine.evaluate(input) {
            (Some(state), true) => println!("{input:>6} -> accepted in {}", state.name()),
            _ => println!("{input:>6} -> rejected"),
        }
    }

    if let Some(trace) = machine.trace("1010".chars()) {
        let path: Vec<&str> = trace.path().iter().map(|s| s.name()).collect();
        println!("\nPath for 1010: {}", path.join(" -> "));
    }

    println!("\n=== Example Complete ===");
}
