//! Core State trait and the string-backed `Label` state.
//!
//! The core never interprets a state beyond equality, hashing and its name.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for machine states.
///
/// States are opaque identifiers. The transition table and machine only
/// compare and hash them; `name` is used for error messages and for
/// rejecting blank labels.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the table's universe and function
/// - `Eq` + `Hash`: states key the transition function
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: machines are shared across threads for evaluation
///
/// # Example
///
/// ```rust
/// use dfsm::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Parity {
///     Even,
///     Odd,
/// }
///
/// impl State for Parity {
///     fn name(&self) -> &str {
///         match self {
///             Self::Even => "Even",
///             Self::Odd => "Odd",
///         }
///     }
/// }
///
/// assert_eq!(Parity::Odd.name(), "Odd");
/// assert!(!Parity::Even.is_blank());
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if the name is empty or whitespace-only.
    ///
    /// Blank labels are rejected by the construction entrypoints.
    fn is_blank(&self) -> bool {
        self.name().trim().is_empty()
    }
}

/// A state identified by a free-form label.
///
/// This is the state type used by [`MachineConfig`](crate::config::MachineConfig),
/// where states come from configuration data rather than a Rust enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl State for Label {
    fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
