//! Transition registry and dispatch.
//!
//! The registry maps function names to transformations. It is built once
//! with [`RegistryBuilder`] and is read-only afterwards. Dispatch is the only
//! way a Zab gains history: it snapshots the state on both sides of the call
//! and appends one entry to a copy of the predecessor's history.

use crate::core::{Arg, HistoryEntry, Zab, ZabError};
use crate::functions;
use crate::oracle::TextOracle;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Type alias for registered transformations.
pub type Transform =
    Arc<dyn Fn(&Zab, &[Arg], &dyn TextOracle) -> Result<Zab, ZabError> + Send + Sync>;

/// Builder for constructing registries with a fluent API.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use zab::builder::ZabBuilder;
/// use zab::core::initial_state;
/// use zab::oracle::FailingOracle;
/// use zab::registry::RegistryBuilder;
///
/// let registry = RegistryBuilder::new()
///     .register("shout", |zab, _args, _oracle| {
///         ZabBuilder::from_state(zab).name(zab.name().to_uppercase()).build()
///     })
///     .build(Arc::new(FailingOracle));
///
/// let zab = registry.dispatch(&initial_state(3), "shout", &[]).unwrap();
/// assert_eq!(zab.name(), "CAMA");
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    functions: HashMap<String, Transform>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Add a function. A later registration under the same name replaces
    /// the earlier one.
    pub fn register<F>(mut self, name: &str, function: F) -> Self
    where
        F: Fn(&Zab, &[Arg], &dyn TextOracle) -> Result<Zab, ZabError> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
        self
    }

    /// Build the registry around the oracle its functions will consult.
    pub fn build(self, oracle: Arc<dyn TextOracle>) -> Registry {
        Registry {
            functions: self.functions,
            oracle,
        }
    }
}

/// Immutable name → function catalogue plus the injected oracle.
#[derive(Clone)]
pub struct Registry {
    functions: HashMap<String, Transform>,
    oracle: Arc<dyn TextOracle>,
}

impl Registry {
    /// The standard catalogue: the fourteen game functions plus the
    /// `vin`/`cin` placeholders.
    pub fn standard(oracle: Arc<dyn TextOracle>) -> Self {
        functions::register_all(RegistryBuilder::new()).build(oracle)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Apply `name` to `zab`, returning the successor.
    ///
    /// On failure nothing is recorded and `zab` is untouched. On success the
    /// successor's history is `zab`'s history plus one entry.
    pub fn dispatch(&self, zab: &Zab, name: &str, args: &[Arg]) -> Result<Zab, ZabError> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| ZabError::UnknownFunction {
                name: name.to_string(),
            })?;

        let before = zab.snapshot();
        let next = function(zab, args, self.oracle.as_ref())?;
        let entry = HistoryEntry::new(before, name, args, next.snapshot());

        debug!(function = name, transition = %entry, "Dispatched");

        let history = zab.history().record(entry);
        Ok(next.with_history(history))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("functions", &self.names())
            .finish_non_exhaustive()
    }
}
