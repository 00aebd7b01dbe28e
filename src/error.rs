//! Unified error handling for VecForge
//!
//! Every failure mode in the generator is fatal for the run: the downstream
//! testbench assumes a complete, consistent test suite, so nothing is skipped
//! or silently recovered. This module provides the single error type shared
//! by all components, with a coarse category used for CLI exit messaging.

use std::fmt;

/// Unified error type for VecForge
#[derive(Debug, thiserror::Error)]
pub enum VecForgeError {
    /// Incompatible matrix dimensions for a product (columns(A) != rows(B)).
    /// Shape is a run-wide invariant, so this is a configuration error.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Matrices with different cell kinds, or cells disagreeing with the
    /// configured value domain. Indicates misuse of the library API.
    #[error("domain mismatch: {0}")]
    DomainMismatch(String),

    /// A finite value that cannot be represented as a finite IEEE-754
    /// single-precision float.
    #[error("value {value:e} overflows the finite range of an IEEE-754 single")]
    EncodingDomain { value: f64 },

    /// Exact integer dot product exceeded the i64 cell range.
    #[error("accumulator overflow: {0}")]
    AccumulatorOverflow(String),

    /// Output namespace cannot be created or written.
    #[error("output sink unavailable: {0}")]
    SinkUnavailable(String),

    /// Invalid run configuration (case count, shape, or value domain).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// File I/O error outside the artifact sinks (e.g. reading a config file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VecForgeError {
    /// Categorize the error for handling decisions
    pub fn category(&self) -> ErrorCategory {
        match self {
            VecForgeError::ShapeMismatch(_) | VecForgeError::InvalidConfiguration(_) => {
                ErrorCategory::User
            }
            VecForgeError::EncodingDomain { .. } | VecForgeError::AccumulatorOverflow(_) => {
                ErrorCategory::Data
            }
            VecForgeError::SinkUnavailable(_) | VecForgeError::Io(_) => ErrorCategory::Sink,
            VecForgeError::DomainMismatch(_) => ErrorCategory::Internal,
        }
    }

    /// Check if this is a user-facing error (actionable by fixing the
    /// run configuration).
    pub fn is_user_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::User)
    }
}

/// Error category for handling decisions
///
/// - User: fix the run configuration
/// - Data: a generated or derived value broke a numeric contract
/// - Sink: the output directory or a file under it is unwritable
/// - Internal: indicates a bug in the generator itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration error - actionable by the user
    User,
    /// Numeric contract violation in generated data
    Data,
    /// Output sink failure
    Sink,
    /// Internal error - indicates a bug
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::User => write!(f, "User"),
            ErrorCategory::Data => write!(f, "Data"),
            ErrorCategory::Sink => write!(f, "Sink"),
            ErrorCategory::Internal => write!(f, "Internal"),
        }
    }
}

/// Helper type alias for Results using VecForgeError
pub type VecResult<T> = std::result::Result<T, VecForgeError>;
