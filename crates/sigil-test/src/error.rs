//! Vector parsing errors.

use thiserror::Error;

/// A vector file line that could not be parsed.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Wrong number of colon-separated fields.
    #[error("{set}:{line}: expected {expected} fields, found {actual}")]
    FieldCount {
        /// Vector set name.
        set: &'static str,
        /// 1-based line number.
        line: usize,
        /// Fields the format requires.
        expected: usize,
        /// Fields present.
        actual: usize,
    },

    /// A field is not valid hex.
    #[error("{set}:{line}: field '{field}' is not hex: {source}")]
    Hex {
        /// Vector set name.
        set: &'static str,
        /// 1-based line number.
        line: usize,
        /// Field name.
        field: &'static str,
        /// Decoder error.
        #[source]
        source: hex::FromHexError,
    },

    /// A field decoded to the wrong width or disagrees with another field.
    #[error("{set}:{line}: {reason}")]
    Malformed {
        /// Vector set name.
        set: &'static str,
        /// 1-based line number.
        line: usize,
        /// What is wrong.
        reason: String,
    },
}

/// Result type for vector parsing.
pub type VectorResult<T> = Result<T, VectorError>;
