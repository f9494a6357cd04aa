//! Oracle error types.

use thiserror::Error;

/// Errors an oracle can report.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No oracle is configured, or it refused to answer
    #[error("Oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle process could not be spawned or talked to
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The oracle process exited unsuccessfully
    #[error("Oracle process exited with code {0}")]
    ExitCode(i32),

    /// The oracle answered with bytes that are not UTF-8
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A scripted oracle ran out of answers
    #[error("No scripted answers left")]
    Exhausted,
}
