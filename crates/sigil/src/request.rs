//! Dynamic request and response shapes.
//!
//! A request names its operation by dotted path and carries untyped
//! arguments. On the wire a string argument is hex and an array is raw
//! bytes:
//!
//! ```json
//! {"operation": "auth.mac", "message": "616263", "key": [1, 2, 3]}
//! ```

use serde::{Deserialize, Serialize};
use sigil_crypto::{
    Arguments, ErrorKind, Input, Operation, OperationError, OperationResult, Output,
};

/// One operation call in data form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    /// Operation to run.
    pub operation: Operation,
    /// Message and key.
    #[serde(flatten)]
    pub arguments: Arguments,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WireRequest {
    operation: String,
    #[serde(default, deserialize_with = "sigil_crypto::validate::present")]
    message: Option<Input>,
    #[serde(default, deserialize_with = "sigil_crypto::validate::present")]
    key: Option<Input>,
}

impl Request {
    /// Create a request.
    #[must_use]
    pub fn new(operation: Operation, arguments: Arguments) -> Self {
        Self {
            operation,
            arguments,
        }
    }

    /// Parse a JSON request.
    ///
    /// # Errors
    ///
    /// [`OperationError::InvalidEncoding`] if the document is malformed or
    /// has a field other than `operation`, `message` and `key`, and
    /// [`OperationError::UnknownOperation`] if the operation name is not one
    /// of the seven facade operations.
    pub fn from_json(json: &str) -> OperationResult<Self> {
        let wire: WireRequest =
            serde_json::from_str(json).map_err(|e| OperationError::InvalidEncoding {
                argument: "request",
                reason: e.to_string(),
            })?;
        Ok(Self {
            operation: wire.operation.parse()?,
            arguments: Arguments {
                message: wire.message,
                key: wire.key,
            },
        })
    }
}

/// Failure payload of a [`Response`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Failure category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl From<&OperationError> for ErrorBody {
    fn from(err: &OperationError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Serializable outcome of a request.
///
/// Success is `{"<field>": "<hex>"}`, failure is
/// `{"error": {"kind": "...", "message": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// The operation's output record.
    Success(Output),
    /// The operation's error.
    Failure {
        /// Error details.
        error: ErrorBody,
    },
}

impl Response {
    /// Whether the operation succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Render as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<OperationResult<Output>> for Response {
    fn from(result: OperationResult<Output>) -> Self {
        match result {
            Ok(output) => Self::Success(output),
            Err(err) => Self::Failure {
                error: ErrorBody::from(&err),
            },
        }
    }
}
