//! Primary authentication operations: Ed25519 signing and HMAC-SHA-384.

use crate::error::OperationResult;
use crate::key::{MacKey, SecretKey};
use crate::message::Message;
use crate::output::{Authenticated, Signature, Signed, Tag};
use crate::primitives::{self, SHA384_LEN};

/// Tag width of [`mac`].
pub const MAC_LEN: usize = SHA384_LEN;

/// Sign `message` with Ed25519.
///
/// Signatures are deterministic: the same key and message always produce
/// the same 64 bytes.
///
/// # Errors
///
/// Returns [`OperationError::Primitive`](crate::OperationError::Primitive)
/// if a 64-byte key's public half does not match its seed.
pub fn sign(message: &Message, secret_key: &SecretKey) -> OperationResult<Signed> {
    let bytes = primitives::ed25519_sign(secret_key.expose_bytes(), message.as_bytes())?;
    Ok(Signed {
        signature: Signature::from_bytes(bytes),
    })
}

/// Authenticate `message` with HMAC-SHA-384.
///
/// # Errors
///
/// Returns [`OperationError::Primitive`](crate::OperationError::Primitive)
/// if the HMAC implementation rejects the key.
pub fn mac(message: &Message, key: &MacKey) -> OperationResult<Authenticated<MAC_LEN>> {
    let bytes = primitives::hmac_sha384(key.expose_bytes(), message.as_bytes())?;
    Ok(Authenticated {
        mac: Tag::from_bytes(bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperationError;

    const SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const SIG: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    #[test]
    fn test_sign_rfc8032_empty_message() {
        let sk = SecretKey::from_hex(SEED).unwrap();
        let out = sign(&Message::empty(), &sk).unwrap();
        assert_eq!(out.signature.to_hex(), SIG);

        let pk = sk.public_key().unwrap();
        assert_eq!(pk.to_hex(), PUBLIC);
        assert!(pk.verify(b"", &out.signature).unwrap());
    }

    #[test]
    fn test_sign_is_deterministic() {
        let sk = SecretKey::generate();
        let m = Message::from(b"same input");
        assert_eq!(sign(&m, &sk).unwrap(), sign(&m, &sk).unwrap());
    }

    #[test]
    fn test_tampered_message_fails_verification() {
        let sk = SecretKey::generate();
        let pk = sk.public_key().unwrap();
        let m = Message::from(b"hello world");
        let out = sign(&m, &sk).unwrap();

        let mut tampered = m.as_bytes().to_vec();
        if let Some(last) = tampered.last_mut() {
            *last ^= 0x01;
        }
        assert!(!pk.verify(&tampered, &out.signature).unwrap());
    }

    #[test]
    fn test_sign_with_mismatched_keypair() {
        let mut bytes = hex::decode(SEED).unwrap();
        bytes.extend_from_slice(&[0u8; 32]);
        let sk = SecretKey::from_bytes(&bytes).unwrap();
        let err = sign(&Message::from(b"x"), &sk).unwrap_err();
        assert!(matches!(err, OperationError::Primitive(_)));
    }

    #[test]
    fn test_mac_rfc4231_case_2() {
        let key = MacKey::from(b"Jefe");
        let m = Message::from(b"what do ya want for nothing?");
        let out = mac(&m, &key).unwrap();
        assert_eq!(
            out.mac.to_hex(),
            "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649"
        );
        assert_eq!(out.mac.len(), MAC_LEN);
    }
}
