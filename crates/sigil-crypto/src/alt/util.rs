//! Alternate digests: SHA-256 and SHA-512.

use crate::error::OperationResult;
use crate::message::Message;
use crate::output::{Digest, Hashed};
use crate::primitives::{self, SHA256_LEN, SHA512_LEN};

/// Hash `message` with SHA-256.
///
/// # Errors
///
/// Never fails today; the `Result` keeps the shape shared by every operation.
pub fn sha256(message: &Message) -> OperationResult<Hashed<SHA256_LEN>> {
    Ok(Hashed {
        hash: Digest::from_bytes(primitives::sha256(message.as_bytes())),
    })
}

/// Hash `message` with SHA-512.
///
/// # Errors
///
/// Never fails today; the `Result` keeps the shape shared by every operation.
pub fn sha512(message: &Message) -> OperationResult<Hashed<SHA512_LEN>> {
    Ok(Hashed {
        hash: Digest::from_bytes(primitives::sha512(message.as_bytes())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abc_digests() {
        let m = Message::from(b"abc");
        assert_eq!(
            sha256(&m).unwrap().hash.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            sha512(&m).unwrap().hash.to_hex(),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }
}
