//! Error types for the Unitwise system.
//!
//! Uses `thiserror` for ergonomic error definition. Errors are reserved for
//! contract violations (malformed catalog data) and runtime I/O; a grammar
//! mismatch is never an error, it is the absence of a parse result.

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The main error type for Unitwise operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an empty-key error.
    #[must_use]
    pub fn empty_key() -> Self {
        Self::new(ErrorKind::EmptyKey)
    }

    /// Creates a duplicate-unit error.
    #[must_use]
    pub fn duplicate_unit(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateUnit(name.into()))
    }

    /// Creates an invalid-factor error.
    #[must_use]
    pub fn invalid_factor(unit: impl Into<String>, factor: f64) -> Self {
        Self::new(ErrorKind::InvalidFactor {
            unit: unit.into(),
            factor,
        })
    }

    /// Creates a line-editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The empty string cannot be a trie key.
    #[error("empty string is not a valid trie key")]
    EmptyKey,

    /// A unit name or alias was registered twice.
    #[error("duplicate unit name: {0}")]
    DuplicateUnit(String),

    /// A unit's conversion factor is not a finite positive number.
    #[error("invalid conversion factor for {unit}: {factor}")]
    InvalidFactor {
        /// The unit whose factor is malformed.
        unit: String,
        /// The offending factor.
        factor: f64,
    },

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// An I/O operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
