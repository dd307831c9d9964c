//! Deterministic transition function over a fixed state/symbol universe.
//!
//! The table only accepts facts that stay inside its declared universes, and
//! [`TransitionTable::validate`] establishes totality once so that evaluation
//! never has to handle a missing entry.

use super::state::State;
use super::transition::{Symbol, Transition};
use crate::error::DefinitionError;
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Mapping from (state, symbol) to result state.
///
/// The function is only reachable through [`register`](Self::register),
/// [`lookup`](Self::lookup) and the validation methods. Registering the same
/// (state, symbol) pair twice overwrites the earlier result.
///
/// # Example
///
/// ```rust
/// use dfsm::core::{Label, Transition, TransitionTable};
///
/// let mut table = TransitionTable::new(
///     ["even", "odd"].map(Label::from),
///     ['1'],
/// );
/// table.register(Transition::new("even", '1', "odd")).unwrap();
/// assert!(table.validate().is_err());
///
/// table.register(Transition::new("odd", '1', "even")).unwrap();
/// assert!(table.validate().is_ok());
/// assert_eq!(table.lookup(&Label::from("even"), '1'), Some(&Label::from("odd")));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State> {
    states: HashSet<S>,
    alphabet: HashSet<Symbol>,
    function: HashMap<S, HashMap<Symbol, S>>,
}

impl<S: State> TransitionTable<S> {
    /// Create an empty function over the given universes.
    ///
    /// Duplicates collapse. Empty universes are accepted here; the
    /// construction entrypoints reject them before a table is built.
    pub fn new<I, A>(states: I, alphabet: A) -> Self
    where
        I: IntoIterator<Item = S>,
        A: IntoIterator<Item = Symbol>,
    {
        Self {
            states: states.into_iter().collect(),
            alphabet: alphabet.into_iter().collect(),
            function: HashMap::new(),
        }
    }

    /// Add a transition fact, overwriting any previous result for the pair.
    ///
    /// Fails without touching the function if the source state, the symbol
    /// or the result state is outside the declared universes.
    pub fn register(&mut self, transition: Transition<S>) -> Result<(), DefinitionError> {
        let Transition { from, symbol, to } = transition;

        if !self.states.contains(&from) {
            return Err(DefinitionError::UnknownState {
                state: from.name().to_string(),
            });
        }
        if !self.alphabet.contains(&symbol) {
            return Err(DefinitionError::UnknownSymbol { symbol });
        }
        if !self.states.contains(&to) {
            return Err(DefinitionError::UnknownResultState {
                state: to.name().to_string(),
            });
        }

        self.function.entry(from).or_default().insert(symbol, to);
        Ok(())
    }

    /// Check that every declared state has a result for every declared symbol.
    ///
    /// Stops at the first gap found. Enumeration order is unspecified, so
    /// when several pairs are missing any one of them may be reported.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        for state in &self.states {
            let Some(row) = self.function.get(state) else {
                return Err(DefinitionError::IncompleteTransition {
                    state: state.name().to_string(),
                    symbol: None,
                });
            };
            for symbol in &self.alphabet {
                if !row.contains_key(symbol) {
                    return Err(DefinitionError::IncompleteTransition {
                        state: state.name().to_string(),
                        symbol: Some(*symbol),
                    });
                }
            }
        }
        Ok(())
    }

    /// Check totality, accumulating every gap instead of stopping at the first.
    ///
    /// A state with no entries at all is reported once, without a symbol.
    pub fn audit(&self) -> Validation<(), NonEmptyVec<DefinitionError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionError>>> = Vec::new();

        for state in &self.states {
            match self.function.get(state) {
                None => checks.push(Validation::fail(DefinitionError::IncompleteTransition {
                    state: state.name().to_string(),
                    symbol: None,
                })),
                Some(row) => {
                    for symbol in &self.alphabet {
                        let check = if row.contains_key(symbol) {
                            Validation::success(())
                        } else {
                            Validation::fail(DefinitionError::IncompleteTransition {
                                state: state.name().to_string(),
                                symbol: Some(*symbol),
                            })
                        };
                        checks.push(check);
                    }
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Result state for `(state, symbol)`, if one is registered.
    pub fn lookup(&self, state: &S, symbol: Symbol) -> Option<&S> {
        self.function.get(state)?.get(&symbol)
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn contains_symbol(&self, symbol: Symbol) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// The declared state universe.
    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    /// The declared alphabet.
    pub fn alphabet(&self) -> &HashSet<Symbol> {
        &self.alphabet
    }

    /// Number of registered (state, symbol) pairs.
    pub fn len(&self) -> usize {
        self.function.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Label;

    fn table(states: &[&str], alphabet: &[char]) -> TransitionTable<Label> {
        TransitionTable::new(
            states.iter().map(|s| Label::from(*s)),
            alphabet.iter().copied(),
        )
    }

    fn register_all(table: &mut TransitionTable<Label>, facts: &[(&str, char, &str)]) {
        for (from, symbol, to) in facts {
            table
                .register(Transition::new(*from, *symbol, *to))
                .unwrap();
        }
    }

    #[test]
    fn new_table_starts_empty() {
        let table = table(&["q0", "q1"], &['a', 'b']);

        assert_eq!(table.states().len(), 2);
        assert_eq!(table.alphabet().len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn duplicate_universe_entries_collapse() {
        let table = table(&["q0", "q0", "q1"], &['a', 'a']);

        assert_eq!(table.states().len(), 2);
        assert_eq!(table.alphabet().len(), 1);
    }

    #[test]
    fn empty_universes_are_accepted() {
        let table: TransitionTable<Label> = TransitionTable::new(Vec::new(), Vec::new());

        assert!(table.states().is_empty());
        assert!(table.alphabet().is_empty());
        assert!(table.validate().is_ok());
    }

    #[test]
    fn register_accepts_known_facts() {
        let mut table = table(&["q0", "q1", "q2"], &['a', 'b']);

        assert!(table.register(Transition::new("q0", 'a', "q1")).is_ok());
        assert_eq!(table.lookup(&Label::from("q0"), 'a'), Some(&Label::from("q1")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn register_overwrites_previous_result() {
        let mut table = table(&["q0", "q1", "q2"], &['a', 'b']);

        table.register(Transition::new("q0", 'a', "q1")).unwrap();
        table.register(Transition::new("q0", 'a', "q0")).unwrap();

        assert_eq!(table.lookup(&Label::from("q0"), 'a'), Some(&Label::from("q0")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn register_rejects_unknown_state() {
        let mut table = table(&["q0", "q1", "q2"], &['a', 'b']);

        let result = table.register(Transition::new("q5", 'a', "q1"));
        assert_eq!(
            result,
            Err(DefinitionError::UnknownState {
                state: "q5".to_string()
            })
        );
    }

    #[test]
    fn register_rejects_unknown_symbol() {
        let mut table = table(&["q0", "q1", "q2"], &['a', 'b']);

        let result = table.register(Transition::new("q0", 'c', "q1"));
        assert_eq!(result, Err(DefinitionError::UnknownSymbol { symbol: 'c' }));
    }

    #[test]
    fn register_rejects_unknown_result_state() {
        let mut table = table(&["q0", "q1", "q2"], &['a', 'b']);

        let result = table.register(Transition::new("q0", 'a', "q5"));
        assert_eq!(
            result,
            Err(DefinitionError::UnknownResultState {
                state: "q5".to_string()
            })
        );
    }

    #[test]
    fn failed_register_leaves_entries_unchanged() {
        let mut table = table(&["q0", "q1"], &['a']);
        table.register(Transition::new("q0", 'a', "q1")).unwrap();

        assert!(table.register(Transition::new("q0", 'a', "q9")).is_err());

        assert_eq!(table.lookup(&Label::from("q0"), 'a'), Some(&Label::from("q1")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_of_undefined_pair_is_none() {
        let table = table(&["q0"], &['a']);

        assert_eq!(table.lookup(&Label::from("q0"), 'a'), None);
        assert_eq!(table.lookup(&Label::from("nope"), 'z'), None);
    }

    #[test]
    fn validate_accepts_complete_table() {
        let mut table = table(&["q0", "q1"], &['a', 'b']);
        register_all(
            &mut table,
            &[
                ("q0", 'a', "q1"),
                ("q0", 'b', "q0"),
                ("q1", 'a', "q0"),
                ("q1", 'b', "q1"),
            ],
        );

        assert!(table.validate().is_ok());
    }

    #[test]
    fn validate_accepts_self_loops() {
        let mut table = table(&["q0"], &['a', 'b']);
        register_all(&mut table, &[("q0", 'a', "q0"), ("q0", 'b', "q0")]);

        assert!(table.validate().is_ok());
    }

    #[test]
    fn validate_reports_state_without_entries() {
        let mut table = table(&["q0", "q1"], &['a', 'b']);
        register_all(&mut table, &[("q0", 'a', "q1"), ("q0", 'b', "q0")]);

        assert_eq!(
            table.validate(),
            Err(DefinitionError::IncompleteTransition {
                state: "q1".to_string(),
                symbol: None,
            })
        );
        assert!(table
            .validate()
            .unwrap_err()
            .to_string()
            .contains("missing transitions for state q1"));
    }

    #[test]
    fn validate_reports_missing_input() {
        let mut table = table(&["q0"], &['a', 'b']);
        register_all(&mut table, &[("q0", 'a', "q0")]);

        assert_eq!(
            table.validate(),
            Err(DefinitionError::IncompleteTransition {
                state: "q0".to_string(),
                symbol: Some('b'),
            })
        );
    }

    #[test]
    fn special_characters_are_ordinary_symbols() {
        let mut table = table(&["start", "space", "tab", "end"], &[' ', '\t', '\n', '@']);

        for from in ["start", "space", "tab", "end"] {
            register_all(
                &mut table,
                &[
                    (from, ' ', "space"),
                    (from, '\t', "tab"),
                    (from, '\n', "end"),
                    (from, '@', "end"),
                ],
            );
        }

        assert!(table.validate().is_ok());
        assert_eq!(table.len(), 16);
    }

    #[test]
    fn audit_succeeds_on_complete_table() {
        let mut table = table(&["q0"], &['a', 'b']);
        register_all(&mut table, &[("q0", 'a', "q0"), ("q0", 'b', "q0")]);

        assert!(table.audit().is_success());
    }

    #[test]
    fn audit_accumulates_every_gap() {
        let mut table = table(&["q0", "q1", "q2"], &['a', 'b']);
        register_all(&mut table, &[("q0", 'a', "q0"), ("q2", 'a', "q2"), ("q2", 'b', "q2")]);

        match table.audit() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);

                let missing_b = errors.iter().any(|e| {
                    *e == DefinitionError::IncompleteTransition {
                        state: "q0".to_string(),
                        symbol: Some('b'),
                    }
                });
                let missing_q1 = errors.iter().any(|e| {
                    *e == DefinitionError::IncompleteTransition {
                        state: "q1".to_string(),
                        symbol: None,
                    }
                });

                assert!(missing_b);
                assert!(missing_q1);
            }
            Validation::Success(_) => panic!("Expected audit to report gaps"),
        }
    }
}
