//! Builder API for ergonomic machine construction.
//!
//! This module provides the fluent [`MachineBuilder`] and the
//! [`state_enum!`](crate::state_enum) macro for defining typed states.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;

use crate::core::{State, Symbol, Transition};

/// Create a transition for every symbol in `symbols` from `from` to `to`.
///
/// Handy for sink states and self-loops that ignore their input.
///
/// # Example
///
/// ```
/// use dfsm::builder::{uniform_transitions, MachineBuilder};
/// use dfsm::core::Label;
///
/// let machine = MachineBuilder::<Label>::new()
///     .states(["live", "dead"])
///     .alphabet(['a', 'b'])
///     .initial("live")
///     .accepting(["live"])
///     .transition("live", 'a', "live")
///     .transition("live", 'b', "dead")
///     .transitions(uniform_transitions(Label::from("dead"), ['a', 'b'], Label::from("dead")))
///     .build()
///     .unwrap();
///
/// assert!(machine.accepts("aaa"));
/// assert!(!machine.accepts("aba"));
/// ```
pub fn uniform_transitions<S, I>(from: S, symbols: I, to: S) -> Vec<Transition<S>>
where
    S: State,
    I: IntoIterator<Item = Symbol>,
{
    symbols
        .into_iter()
        .map(|symbol| Transition {
            from: from.clone(),
            symbol,
            to: to.clone(),
        })
        .collect()
}
