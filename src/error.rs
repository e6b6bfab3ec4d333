//! Error types for the EEE Helper calculator.
//!
//! This module provides a unified error type [`EeeError`] that covers
//! malformed numeric input, formula domain violations, guarded-division
//! singularities, menu selection errors and log store I/O.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`EeeError`].
pub type Result<T> = std::result::Result<T, EeeError>;

/// The numeric kind a line of text was expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Base-10 integer
    Integer,
    /// Floating-point real
    Real,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => write!(f, "integer"),
            NumberKind::Real => write!(f, "number"),
        }
    }
}

/// Unified error type for all calculator operations.
#[derive(Error, Debug)]
pub enum EeeError {
    // ============ Input Errors ============
    /// Raw text failed strict numeric validation
    #[error("'{input}' is not a valid {kind}")]
    InvalidNumber { input: String, kind: NumberKind },

    /// The input stream was closed
    #[error("Input stream closed")]
    EndOfInput,

    /// Menu code outside the offered range
    #[error("Invalid selection {choice}")]
    InvalidSelection { choice: i64 },

    // ============ Formula Errors ============
    /// A precondition on a formula's inputs was violated
    #[error("{message}")]
    Domain { message: String },

    /// A guarded denominator was zero or near zero
    #[error("{message}")]
    Singularity { message: String },

    /// A solver variant received the wrong number of inputs
    #[error("Variant '{variant}' expects {expected} inputs, got {got}")]
    Arity {
        variant: &'static str,
        expected: usize,
        got: usize,
    },

    // ============ I/O Errors ============
    /// Error appending to the log file
    #[error("Failed to append to log '{path}': {source}")]
    LogWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading the log file
    #[error("Failed to read log '{path}': {source}")]
    LogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Terminal read/write failure
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EeeError {
    /// Create a domain error
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// Create a singularity error
    pub fn singularity(message: impl Into<String>) -> Self {
        Self::Singularity {
            message: message.into(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(input: impl Into<String>, kind: NumberKind) -> Self {
        Self::InvalidNumber {
            input: input.into(),
            kind,
        }
    }

    /// Whether this error aborts only the current formula, leaving the session usable.
    pub fn is_formula_error(&self) -> bool {
        matches!(self, Self::Domain { .. } | Self::Singularity { .. })
    }
}
