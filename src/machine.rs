//! Machine that evaluates input sequences against a validated table.
//!
//! A `Machine` is immutable after construction. Evaluation borrows it
//! immutably and carries only the current state, so any number of callers
//! may evaluate against one machine at the same time.

use crate::core::{State, Step, Symbol, Trace, TransitionTable};
use crate::error::DefinitionError;
use std::collections::HashSet;

/// A deterministic finite-state machine.
///
/// # Example
///
/// ```rust
/// use dfsm::core::{Label, Transition, TransitionTable};
/// use dfsm::Machine;
///
/// let mut table = TransitionTable::new(["even", "odd"].map(Label::from), ['1']);
/// table.register(Transition::new("even", '1', "odd")).unwrap();
/// table.register(Transition::new("odd", '1', "even")).unwrap();
///
/// let machine = Machine::new(table, Label::from("even"), [Label::from("odd")]).unwrap();
///
/// assert_eq!(machine.evaluate("111"), (Some(&Label::from("odd")), true));
/// assert_eq!(machine.evaluate("11"), (None, false));
/// ```
#[derive(Clone, Debug)]
pub struct Machine<S: State> {
    table: TransitionTable<S>,
    initial: S,
    accepting: HashSet<S>,
}

impl<S: State> Machine<S> {
    /// Build a machine from a table, an initial state and accepting states.
    ///
    /// The initial state and every accepting state must belong to the
    /// table's state universe, and the table must be total.
    pub fn new<A>(table: TransitionTable<S>, initial: S, accepting: A) -> Result<Self, DefinitionError>
    where
        A: IntoIterator<Item = S>,
    {
        if !table.contains_state(&initial) {
            return Err(DefinitionError::InvalidInitialState {
                state: initial.name().to_string(),
            });
        }

        let accepting: HashSet<S> = accepting.into_iter().collect();
        if let Some(state) = accepting.iter().find(|s| !table.contains_state(s)) {
            return Err(DefinitionError::InvalidFinalState {
                state: state.name().to_string(),
            });
        }

        table.validate()?;

        tracing::debug!(
            states = table.states().len(),
            symbols = table.alphabet().len(),
            accepting = accepting.len(),
            initial = initial.name(),
            "machine constructed"
        );

        Ok(Self {
            table,
            initial,
            accepting,
        })
    }

    /// Evaluate a string, one `char` per symbol.
    ///
    /// Returns the final state and `true` when the input ends in an accepting
    /// state. Returns `(None, false)` for empty input, for input containing a
    /// symbol outside the alphabet, and for input ending in a non-accepting
    /// state.
    pub fn evaluate(&self, input: &str) -> (Option<&S>, bool) {
        self.evaluate_symbols(input.chars())
    }

    /// Evaluate an arbitrary sequence of symbols.
    ///
    /// Empty input is rejected even when the initial state is accepting.
    pub fn evaluate_symbols<I>(&self, input: I) -> (Option<&S>, bool)
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut symbols = input.into_iter().peekable();
        if symbols.peek().is_none() {
            tracing::trace!("rejected: empty input");
            return (None, false);
        }

        let mut current = &self.initial;
        for symbol in symbols {
            match self.next_state(current, symbol) {
                Some(next) => current = next,
                None => return (None, false),
            }
        }

        if self.accepting.contains(current) {
            (Some(current), true)
        } else {
            tracing::trace!(state = current.name(), "rejected: final state is not accepting");
            (None, false)
        }
    }

    /// Whether the machine accepts `input`.
    pub fn accepts(&self, input: &str) -> bool {
        self.evaluate(input).1
    }

    /// Record every step taken while consuming `input`.
    ///
    /// Unlike [`evaluate`](Self::evaluate) the trace is returned whether or
    /// not the run ends in an accepting state. Returns `None` for empty input
    /// or when a symbol is outside the alphabet.
    pub fn trace<I>(&self, input: I) -> Option<Trace<S>>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut symbols = input.into_iter().peekable();
        symbols.peek()?;

        let mut trace = Trace::new(self.initial.clone());
        let mut current = &self.initial;
        for symbol in symbols {
            let next = self.next_state(current, symbol)?;
            trace = trace.record(Step {
                from: current.clone(),
                symbol,
                to: next.clone(),
            });
            current = next;
        }

        let accepted = self.accepting.contains(current);
        Some(trace.with_verdict(accepted))
    }

    fn next_state(&self, current: &S, symbol: Symbol) -> Option<&S> {
        if !self.table.contains_symbol(symbol) {
            tracing::trace!(?symbol, "rejected: symbol outside alphabet");
            return None;
        }
        // Total after validation: every (state, symbol) in the universes has an entry.
        self.table.lookup(current, symbol)
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn accepting_states(&self) -> &HashSet<S> {
        &self.accepting
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting.contains(state)
    }

    /// The validated transition table. Read-only.
    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }
}
