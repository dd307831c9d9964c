//! Transition facts.

use super::state::State;

/// An input symbol: any single Unicode scalar value.
pub type Symbol = char;

/// A single (source, symbol, result) fact.
///
/// Transitions have no lifecycle of their own. They are ingested by
/// [`TransitionTable::register`](super::TransitionTable::register) and
/// afterwards exist only as an entry of the table's function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The input symbol consumed
    pub symbol: Symbol,
    /// The state being transitioned to
    pub to: S,
}

impl<S: State> Transition<S> {
    pub fn new(from: impl Into<S>, symbol: Symbol, to: impl Into<S>) -> Self {
        Self {
            from: from.into(),
            symbol,
            to: to.into(),
        }
    }
}

impl<S: State> From<(S, Symbol, S)> for Transition<S> {
    fn from((from, symbol, to): (S, Symbol, S)) -> Self {
        Self { from, symbol, to }
    }
}
