//! Opaque message bytes.

use std::fmt;

use crate::error::{OperationError, OperationResult};

/// An arbitrary-length byte message.
///
/// Messages are opaque binary; the empty message is valid input to every
/// operation.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Message(Vec<u8>);

impl Message {
    /// Wrap owned bytes.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The empty message.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Decode from hex string.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidEncoding`] if the string is not valid hex.
    pub fn from_hex(s: &str) -> OperationResult<Self> {
        hex::decode(s)
            .map(Self)
            .map_err(|e| OperationError::InvalidEncoding {
                argument: "message",
                reason: e.to_string(),
            })
    }

    /// Get the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the message is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Consume and return the bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Message({} bytes)", self.0.len())
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Message {
    fn from(bytes: &[u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        let m = Message::empty();
        assert!(m.is_empty());
        assert_eq!(m, Message::from_hex("").unwrap());
    }

    #[test]
    fn test_from_hex_rejects_odd_length() {
        let err = Message::from_hex("abc").unwrap_err();
        assert!(matches!(
            err,
            OperationError::InvalidEncoding {
                argument: "message",
                ..
            }
        ));
    }

    #[test]
    fn test_debug_hides_content() {
        let m = Message::from(b"secret plan");
        assert_eq!(format!("{m:?}"), "Message(11 bytes)");
    }
}
