//! Builder for constructing machines from raw definition data.

use crate::core::{State, Symbol, Transition, TransitionTable};
use crate::error::DefinitionError;
use crate::machine::Machine;

/// Builder for constructing machines with a fluent API.
///
/// Collects states, alphabet, initial state, accepting states and
/// transitions, then checks and assembles them in [`build`](Self::build).
/// Duplicate entries in any list are allowed and collapse.
pub struct MachineBuilder<S: State> {
    states: Vec<S>,
    alphabet: Vec<Symbol>,
    initial: Option<S>,
    accepting: Vec<S>,
    transitions: Vec<Transition<S>>,
}

impl<S: State> MachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            initial: None,
            accepting: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Add states to the universe.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add symbols to the alphabet.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add accepting states (at least one required).
    pub fn accepting<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a single transition.
    pub fn transition(mut self, from: impl Into<S>, symbol: Symbol, to: impl Into<S>) -> Self {
        self.transitions.push(Transition::new(from, symbol, to));
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the machine.
    ///
    /// Presence checks run first, in this order: states, alphabet, initial
    /// state, transitions, accepting states. Blank labels are rejected next,
    /// then every transition is registered and the machine is validated.
    pub fn build(self) -> Result<Machine<S>, DefinitionError> {
        if self.states.is_empty() {
            return Err(DefinitionError::EmptyStates);
        }
        if self.alphabet.is_empty() {
            return Err(DefinitionError::EmptyAlphabet);
        }
        let initial = match self.initial {
            Some(state) if !state.name().is_empty() => state,
            _ => return Err(DefinitionError::EmptyInitialState),
        };
        if self.transitions.is_empty() {
            return Err(DefinitionError::EmptyTransitions);
        }
        if self.accepting.is_empty() {
            return Err(DefinitionError::EmptyFinalStates);
        }

        if self
            .states
            .iter()
            .chain(self.accepting.iter())
            .any(State::is_blank)
        {
            return Err(DefinitionError::BlankStateLabel);
        }

        let mut table = TransitionTable::new(self.states, self.alphabet);
        for transition in self.transitions {
            table.register(transition)?;
        }

        Machine::new(table, initial, self.accepting)
    }
}

impl<S: State> Default for MachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
