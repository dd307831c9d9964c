//! Machine From Configuration
//!
//! This example builds a machine from a JSON definition and shows how
//! definition errors are reported.
//!
//! Key concepts:
//! - `MachineConfig` deserialization
//! - Construction-time errors with stable codes
//! - Accumulating every missing transition with `audit`
//!
//! Run with: cargo run --example config_file

use dfsm::core::{Label, TransitionTable};
use dfsm::MachineConfig;
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

const EVEN_ONES: &str = r#"{
    "states": ["even", "odd"],
    "alphabet": ["0", "1"],
    "initial": "even",
    "accepting": ["even"],
    "transitions": [
        {"from": "even", "symbol": "0", "to": "even"},
        {"from": "even", "symbol": "1", "to": "odd"},
        {"from": "odd", "symbol": "0", "to": "odd"},
        {"from": "odd", "symbol": "1", "to": "even"}
    ]
}"#;

const INCOMPLETE: &str = r#"{
    "states": ["even", "odd"],
    "alphabet": ["0", "1"],
    "initial": "even",
    "accepting": ["even"],
    "transitions": [
        {"from": "even", "symbol": "1", "to": "odd"}
    ]
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Machine From Configuration ===\n");

    let machine = MachineConfig::from_json(EVEN_ONES)
        .and_then(MachineConfig::build)
        .unwrap();

    for input in ["0110", "0111", "1"] {
        println!("{input:>5} accepted: {}", machine.accepts(input));
    }

    println!("\nBuilding an incomplete definition:");
    match MachineConfig::from_json(INCOMPLETE).and_then(MachineConfig::build) {
        Ok(_) => println!("  unexpectedly valid"),
        Err(err) => println!("  [{}] {}", err.error_code(), err),
    }

    println!("\nAuditing the same table for every gap:");
    let mut table = TransitionTable::new(["even", "odd"].map(Label::from), ['0', '1']);
    table
        .register(dfsm::Transition::new("even", '1', "odd"))
        .unwrap();
    match table.audit() {
        Validation::Success(_) => println!("  complete"),
        Validation::Failure(errors) => {
            for err in errors.iter() {
                println!("  {err}");
            }
        }
    }

    println!("\n=== Example Complete ===");
}
