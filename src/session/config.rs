//! Game configuration loaded from TOML.

use super::catalog::playable_names;
use crate::oracle::{CommandOracle, FailingOracle, TextOracle};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for one game.
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// ```toml
/// turns = 12
/// functions = ["fin", "rox", "lox"]
/// pick = 2
/// seed = 7
///
/// [oracle]
/// command = "llm"
/// args = ["-m", "gpt-4o-mini"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Turn budget
    pub turns: u32,
    /// Pool of functions a game may offer
    pub functions: Vec<String>,
    /// How many functions from the pool a game offers
    pub pick: usize,
    /// Seed for function selection; random when absent
    pub seed: Option<u64>,
    pub oracle: OracleConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turns: 10,
            functions: playable_names(),
            pick: 3,
            seed: None,
            oracle: OracleConfig::default(),
        }
    }
}

/// Which program answers oracle prompts. Without a command, every
/// oracle-dependent function uses its fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OracleConfig {
    pub command: Option<String>,
    pub args: Vec<String>,
}

impl OracleConfig {
    pub fn build(&self) -> Arc<dyn TextOracle> {
        match &self.command {
            Some(command) => Arc::new(CommandOracle::new(command).args(self.args.iter().cloned())),
            None => Arc::new(FailingOracle),
        }
    }
}

impl GameConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
