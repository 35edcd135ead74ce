//! JavaScript error types.
//!
//! Classification never fails; the only fallible operations in this crate
//! are the constructors that mirror throwing JavaScript constructors, such
//! as `new RegExp("(")`.

use thiserror::Error;

/// The kind of JavaScript error.
///
/// These correspond to JavaScript's built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed pattern or flags
    SyntaxError,
}

impl ErrorKind {
    /// Constructor name as JavaScript reports it.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::SyntaxError => "SyntaxError",
        }
    }
}

/// A JavaScript error with a message.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, JsError};
///
/// let error = JsError::syntax_error("Invalid regular expression: /(/");
/// assert_eq!(error.kind, ErrorKind::SyntaxError);
/// assert_eq!(error.to_string(), "SyntaxError: Invalid regular expression: /(/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", kind.name())]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl JsError {
    /// Create an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsError {
            kind,
            message: message.into(),
        }
    }

    /// Create a SyntaxError
    pub fn syntax_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::SyntaxError, message)
    }
}

/// Result type for fallible value constructors
pub type JsResult<T> = Result<T, JsError>;
