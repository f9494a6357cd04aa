//! Text oracle capability.
//!
//! Some functions need real-world facts: a Spanish translation, the color of
//! an animal, how many sides a shape has. They ask a `TextOracle`, which is
//! injected into the registry rather than reached through a global client.
//!
//! Oracle failures never escape a function call; every call site applies
//! its documented fallback instead.

mod command;
mod error;
mod mock;
pub mod prompts;

pub use command::CommandOracle;
pub use error::OracleError;
pub use mock::{FailingOracle, ScriptedOracle, StaticOracle};

/// A capability that answers a prompt with free text.
///
/// Implementations may block (a subprocess, a network call). They must be
/// shareable so a registry can be used from any thread.
///
/// # Example
///
/// ```rust
/// use zab::oracle::{StaticOracle, TextOracle};
///
/// let oracle = StaticOracle::new("gato");
/// assert_eq!(oracle.respond("Translate 'cat'").unwrap(), "gato");
/// ```
pub trait TextOracle: Send + Sync {
    fn respond(&self, prompt: &str) -> Result<String, OracleError>;
}
