//! Record of a single evaluation run.
//!
//! A trace is immutable once produced. It is a diagnostic companion to
//! [`Machine::evaluate`](crate::machine::Machine::evaluate) and does not change
//! what the machine accepts.

use super::state::State;
use super::transition::Symbol;

/// One consumed symbol and the move it caused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The symbol consumed
    pub symbol: Symbol,
    /// The state being transitioned to
    pub to: S,
}

/// Ordered steps taken from the initial state while consuming an input.
///
/// # Example
///
/// ```rust
/// use dfsm::core::{Label, Step, Trace};
///
/// let trace = Trace::new(Label::from("S0"))
///     .record(Step { from: Label::from("S0"), symbol: '1', to: Label::from("S1") })
///     .record(Step { from: Label::from("S1"), symbol: '0', to: Label::from("S2") });
///
/// let path = trace.path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(trace.final_state(), &Label::from("S2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace<S: State> {
    start: S,
    steps: Vec<Step<S>>,
    accepted: bool,
}

impl<S: State> Trace<S> {
    /// Start a trace at `start` with no steps.
    pub fn new(start: S) -> Self {
        Self {
            start,
            steps: Vec::new(),
            accepted: false,
        }
    }

    /// Append a step, returning the extended trace.
    pub fn record(mut self, step: Step<S>) -> Self {
        self.steps.push(step);
        self
    }

    pub(crate) fn with_verdict(mut self, accepted: bool) -> Self {
        self.accepted = accepted;
        self
    }

    /// States visited: the start state, then the target of each step.
    pub fn path(&self) -> Vec<&S> {
        std::iter::once(&self.start)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    pub fn start_state(&self) -> &S {
        &self.start
    }

    /// The state reached after the last step.
    pub fn final_state(&self) -> &S {
        self.steps.last().map_or(&self.start, |step| &step.to)
    }

    /// Whether the run ended in an accepting state.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}
