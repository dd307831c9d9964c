//! Core machine types and logic.
//!
//! This module contains the pure core of the library:
//! - State definitions via the `State` trait
//! - Transition facts and the validated `TransitionTable`
//! - Immutable run traces
//!
//! Nothing in this module performs I/O.

mod run;
mod state;
mod table;
mod transition;

pub use run::{Step, Trace};
pub use state::{Label, State};
pub use table::TransitionTable;
pub use transition::{Symbol, Transition};
