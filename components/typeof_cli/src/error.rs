//! Error types for the CLI

use core_types::JsError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// A value constructor threw
    #[error("JavaScript error: {0}")]
    JsError(#[from] JsError),

    /// Input could not be parsed, or a report could not be written, as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `--block` named a block the suite does not have
    #[error("unknown block '{0}'")]
    UnknownBlock(String),

    /// The check suite ran but some checks failed
    #[error("{failed} of {total} checks failed")]
    ChecksFailed {
        /// Number of failed checks
        failed: usize,
        /// Number of checks seen
        total: usize,
    },
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
