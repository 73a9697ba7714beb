//! Alternate MACs: HMAC-SHA-256 and HMAC-SHA-512.

use crate::error::OperationResult;
use crate::key::MacKey;
use crate::message::Message;
use crate::output::{Authenticated, Tag};
use crate::primitives::{self, SHA256_LEN, SHA512_LEN};

/// Authenticate `message` with HMAC-SHA-256.
///
/// # Errors
///
/// Returns [`OperationError::Primitive`](crate::OperationError::Primitive)
/// if the HMAC implementation rejects the key.
pub fn hmacsha256(message: &Message, key: &MacKey) -> OperationResult<Authenticated<SHA256_LEN>> {
    let bytes = primitives::hmac_sha256(key.expose_bytes(), message.as_bytes())?;
    Ok(Authenticated {
        mac: Tag::from_bytes(bytes),
    })
}

/// Authenticate `message` with HMAC-SHA-512.
///
/// # Errors
///
/// Returns [`OperationError::Primitive`](crate::OperationError::Primitive)
/// if the HMAC implementation rejects the key.
pub fn hmacsha512(message: &Message, key: &MacKey) -> OperationResult<Authenticated<SHA512_LEN>> {
    let bytes = primitives::hmac_sha512(key.expose_bytes(), message.as_bytes())?;
    Ok(Authenticated {
        mac: Tag::from_bytes(bytes),
    })
}
