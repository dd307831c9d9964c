//! Machine definitions sourced from configuration data.
//!
//! A [`MachineConfig`] mirrors the raw construction parameters: state labels,
//! alphabet, initial state, accepting states and transitions. It can be
//! deserialized from any serde format; [`MachineConfig::from_json`] covers
//! the common case.
//!
//! ```json
//! {
//!   "states": ["S0", "S1", "S2"],
//!   "alphabet": ["0", "1"],
//!   "initial": "S0",
//!   "accepting": ["S0", "S1", "S2"],
//!   "transitions": [
//!     {"from": "S0", "symbol": "0", "to": "S0"},
//!     {"from": "S0", "symbol": "1", "to": "S1"}
//!   ]
//! }
//! ```

use crate::builder::MachineBuilder;
use crate::core::{Label, Symbol, Transition};
use crate::error::DefinitionError;
use crate::machine::Machine;
use serde::Deserialize;

/// One transition as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransitionConfig {
    pub from: Label,
    pub symbol: Symbol,
    pub to: Label,
}

impl From<TransitionConfig> for Transition<Label> {
    fn from(t: TransitionConfig) -> Self {
        Transition {
            from: t.from,
            symbol: t.symbol,
            to: t.to,
        }
    }
}

/// Raw machine definition.
///
/// Missing lists deserialize as empty so that [`build`](Self::build) reports
/// the precise `Empty*` error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MachineConfig {
    #[serde(default)]
    pub states: Vec<Label>,

    #[serde(default)]
    pub alphabet: Vec<Symbol>,

    #[serde(default)]
    pub initial: String,

    #[serde(default, alias = "final_states")]
    pub accepting: Vec<Label>,

    #[serde(default)]
    pub transitions: Vec<TransitionConfig>,
}

impl MachineConfig {
    /// Parse a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the definition and build a machine over [`Label`] states.
    pub fn build(self) -> Result<Machine<Label>, DefinitionError> {
        let mut builder = MachineBuilder::<Label>::new()
            .states(self.states)
            .alphabet(self.alphabet)
            .accepting(self.accepting)
            .transitions(self.transitions.into_iter().map(Transition::from));

        if !self.initial.is_empty() {
            builder = builder.initial(self.initial);
        }

        builder.build()
    }
}
