//! Primary keyless digest: SHA-384.

use crate::error::OperationResult;
use crate::message::Message;
use crate::output::{Digest, Hashed};
use crate::primitives::{self, SHA384_LEN};

/// Digest width of [`hash`].
pub const HASH_LEN: usize = SHA384_LEN;

/// Hash `message` with SHA-384.
///
/// # Errors
///
/// Never fails today; the `Result` keeps the shape shared by every operation.
pub fn hash(message: &Message) -> OperationResult<Hashed<HASH_LEN>> {
    Ok(Hashed {
        hash: Digest::from_bytes(primitives::sha384(message.as_bytes())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_abc() {
        let out = hash(&Message::from(b"abc")).unwrap();
        assert_eq!(
            out.hash.to_hex(),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
        );
    }

    #[test]
    fn test_hash_is_idempotent() {
        let m = Message::from(b"repeat me");
        assert_eq!(hash(&m).unwrap(), hash(&m).unwrap());
    }
}
