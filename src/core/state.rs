//! The Zab: the immutable value every function transforms.
//!
//! A Zab is never mutated after creation. Functions read it and build a
//! successor; the registry attaches the successor's history.

use super::arg::Arg;
use super::error::ZabError;
use super::history::History;
use crate::registry::Registry;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Cama";
pub const DEFAULT_BIM: &str = "Red";
pub const DEFAULT_PIM: i64 = 1;

/// Immutable puzzle state.
///
/// # Example
///
/// ```rust
/// use zab::core::initial_state;
///
/// let zab = initial_state(10);
/// assert_eq!(zab.name(), "Cama");
/// assert_eq!(zab.bim(), "Red");
/// assert_eq!(zab.pim(), 1);
/// assert_eq!(zab.describe(), "You are a zab named Cama with bim Red and pim 1.");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zab {
    turns: u32,
    name: String,
    bim: String,
    pim: i64,
    history: History,
}

/// A Zab with default attributes and an empty history.
pub fn initial_state(turns: u32) -> Zab {
    Zab {
        turns,
        name: DEFAULT_NAME.to_string(),
        bim: DEFAULT_BIM.to_string(),
        pim: DEFAULT_PIM,
        history: History::new(),
    }
}

impl Zab {
    /// Assemble a Zab without validation. Used by functions and the builder.
    pub(crate) fn from_parts(turns: u32, name: String, bim: String, pim: i64) -> Self {
        Self {
            turns,
            name,
            bim,
            pim,
            history: History::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bim(&self) -> &str {
        &self.bim
    }

    pub fn pim(&self) -> i64 {
        self.pim
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Human-readable one-line summary.
    pub fn describe(&self) -> String {
        format!(
            "You are a zab named {} with bim {} and pim {}.",
            self.name, self.bim, self.pim
        )
    }

    /// Snapshot used on both sides of a history line.
    pub fn snapshot(&self) -> String {
        format!(
            "(name: {}, bim: {}, pim: {})",
            self.name, self.bim, self.pim
        )
    }

    /// Invoke `function` through `registry`, returning the successor.
    ///
    /// The receiver is left untouched whether the call succeeds or fails.
    pub fn call(&self, registry: &Registry, function: &str, args: &[Arg]) -> Result<Zab, ZabError> {
        registry.dispatch(self, function, args)
    }

    /// Successor with a new name. Unchecked; outside the crate successors
    /// go through [`ZabBuilder::from_state`](crate::builder::ZabBuilder::from_state).
    pub(crate) fn with_name(&self, name: impl Into<String>) -> Zab {
        Zab::from_parts(self.turns, name.into(), self.bim.clone(), self.pim)
    }

    /// Successor with a new bim.
    pub(crate) fn with_bim(&self, bim: impl Into<String>) -> Zab {
        Zab::from_parts(self.turns, self.name.clone(), bim.into(), self.pim)
    }

    /// Successor with a new pim.
    pub(crate) fn with_pim(&self, pim: i64) -> Zab {
        Zab::from_parts(self.turns, self.name.clone(), self.bim.clone(), pim)
    }

    pub(crate) fn with_history(mut self, history: History) -> Zab {
        self.history = history;
        self
    }
}
