//! Errors raised while defining a machine.
//!
//! Every failure is detected at construction time. Evaluation never fails;
//! rejection of an input is reported through its boolean verdict instead.

use thiserror::Error;

/// Errors that can occur when defining a transition table or machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("must have non-zero amount of states")]
    EmptyStates,

    #[error("must have non-zero amount of inputs")]
    EmptyAlphabet,

    #[error("must have non-blank initial state")]
    EmptyInitialState,

    #[error("must have transition functions")]
    EmptyTransitions,

    #[error("must have some final states")]
    EmptyFinalStates,

    #[error("state cannot be empty")]
    BlankStateLabel,

    #[error("invalid state '{state}'")]
    UnknownState { state: String },

    #[error("invalid input '{symbol}'")]
    UnknownSymbol { symbol: char },

    #[error("invalid result state '{state}'")]
    UnknownResultState { state: String },

    #[error("missing transitions for state {}{}", .state, missing_input(.symbol))]
    IncompleteTransition { state: String, symbol: Option<char> },

    #[error("initial state invalid: '{state}'")]
    InvalidInitialState { state: String },

    #[error("{state} final state is invalid")]
    InvalidFinalState { state: String },

    #[error("invalid machine configuration: {0}")]
    Config(String),
}

fn missing_input(symbol: &Option<char>) -> String {
    match symbol {
        Some(symbol) => format!(" for input {symbol}"),
        None => String::new(),
    }
}

impl DefinitionError {
    /// Returns a stable code for this error, independent of its message.
    pub fn error_code(&self) -> &'static str {
        match self {
            DefinitionError::EmptyStates => "EMPTY_STATES",
            DefinitionError::EmptyAlphabet => "EMPTY_ALPHABET",
            DefinitionError::EmptyInitialState => "EMPTY_INITIAL_STATE",
            DefinitionError::EmptyTransitions => "EMPTY_TRANSITIONS",
            DefinitionError::EmptyFinalStates => "EMPTY_FINAL_STATES",
            DefinitionError::BlankStateLabel => "BLANK_STATE_LABEL",
            DefinitionError::UnknownState { .. } => "UNKNOWN_STATE",
            DefinitionError::UnknownSymbol { .. } => "UNKNOWN_SYMBOL",
            DefinitionError::UnknownResultState { .. } => "UNKNOWN_RESULT_STATE",
            DefinitionError::IncompleteTransition { .. } => "INCOMPLETE_TRANSITION",
            DefinitionError::InvalidInitialState { .. } => "INVALID_INITIAL_STATE",
            DefinitionError::InvalidFinalState { .. } => "INVALID_FINAL_STATE",
            DefinitionError::Config(_) => "INVALID_CONFIG",
        }
    }
}

impl From<serde_json::Error> for DefinitionError {
    fn from(err: serde_json::Error) -> Self {
        DefinitionError::Config(err.to_string())
    }
}
