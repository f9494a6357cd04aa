//! Errors surfaced by dispatch and state construction.

use thiserror::Error;

/// Errors that can occur when constructing or transforming a Zab.
///
/// Oracle failures never appear here. Transformations absorb them into
/// their documented fallback values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ZabError {
    #[error("Unknown function: {name}")]
    UnknownFunction { name: String },

    #[error("Invalid argument for {function}: {reason}")]
    InvalidArgument { function: String, reason: String },
}

impl ZabError {
    pub(crate) fn invalid(function: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            function: function.to_string(),
            reason: reason.into(),
        }
    }
}
