//! Operation error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of an [`OperationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An argument was missing, unexpected, malformed, or the wrong length.
    ///
    /// Always detected before any primitive is invoked.
    InvalidInput,
    /// The underlying primitive rejected the operation or did not complete.
    PrimitiveFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => f.write_str("invalid_input"),
            Self::PrimitiveFailure => f.write_str("primitive_failure"),
        }
    }
}

/// Errors produced by facade operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// A required argument was not supplied.
    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),

    /// An argument was supplied to an operation that does not accept it.
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(&'static str),

    /// An argument could not be coerced to bytes.
    #[error("argument `{argument}` could not be decoded: {reason}")]
    InvalidEncoding {
        /// Name of the offending argument.
        argument: &'static str,
        /// Decoder message.
        reason: String,
    },

    /// A key had a length the algorithm does not accept.
    #[error("invalid key length: expected {}, got {actual}", join_lengths(expected))]
    InvalidKeyLength {
        /// Accepted lengths in bytes.
        expected: &'static [usize],
        /// Actual length in bytes.
        actual: usize,
    },

    /// The operation name is not part of the facade.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    /// The primitive binding rejected its input.
    #[error("primitive failure: {0}")]
    Primitive(String),

    /// The computation was dispatched but never produced an outcome.
    #[error("operation interrupted: {0}")]
    Interrupted(String),
}

impl OperationError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument(_)
            | Self::UnexpectedArgument(_)
            | Self::InvalidEncoding { .. }
            | Self::InvalidKeyLength { .. }
            | Self::UnknownOperation(_) => ErrorKind::InvalidInput,
            Self::Primitive(_) | Self::Interrupted(_) => ErrorKind::PrimitiveFailure,
        }
    }

    /// Whether this is an [`ErrorKind::InvalidInput`] error.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidInput)
    }
}

fn join_lengths(lengths: &[usize]) -> String {
    lengths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Result type for facade operations.
pub type OperationResult<T> = Result<T, OperationError>;
