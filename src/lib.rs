//! dfsm: deterministic finite-state machines
//!
//! A machine is defined by a state universe, an input alphabet, an initial
//! state, a set of accepting states and a transition function. The function
//! is checked for totality once, at construction, so evaluating an input is a
//! plain fold over its symbols that never fails.
//!
//! # Core Concepts
//!
//! - **State**: opaque, hashable identifiers via the `State` trait
//! - **TransitionTable**: the validated (state, symbol) → state function
//! - **Machine**: evaluates inputs and classifies the final state
//!
//! # Example
//!
//! ```rust
//! use dfsm::core::Label;
//! use dfsm::MachineBuilder;
//!
//! // Tracks the value of a binary number modulo three.
//! let machine = MachineBuilder::<Label>::new()
//!     .states(["S0", "S1", "S2"])
//!     .alphabet(['0', '1'])
//!     .initial("S0")
//!     .accepting(["S0", "S1", "S2"])
//!     .transition("S0", '0', "S0")
//!     .transition("S0", '1', "S1")
//!     .transition("S1", '0', "S2")
//!     .transition("S1", '1', "S0")
//!     .transition("S2", '0', "S1")
//!     .transition("S2", '1', "S2")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(machine.evaluate("110"), (Some(&Label::from("S0")), true));
//! assert_eq!(machine.evaluate("1010"), (Some(&Label::from("S1")), true));
//! assert_eq!(machine.evaluate(""), (None, false));
//! assert_eq!(machine.evaluate("012"), (None, false));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::MachineBuilder;
pub use crate::config::MachineConfig;
pub use crate::core::{Label, State, Symbol, Transition, TransitionTable};
pub use crate::error::DefinitionError;
pub use crate::machine::Machine;
