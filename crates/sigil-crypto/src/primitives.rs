//! Primitive bindings.
//!
//! Thin, byte-oriented wrappers over `ed25519-dalek`, `sha2` and `hmac`.
//! Nothing here validates caller intent; the only errors are the ones the
//! underlying crates report, surfaced as [`OperationError::Primitive`].

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey};
use hmac::{Hmac, Mac};
use sha2::{Digest as _, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use crate::error::{OperationError, OperationResult};

/// Ed25519 seed length.
pub const ED25519_SEED_LEN: usize = 32;
/// Ed25519 `seed || public key` length.
pub const ED25519_KEYPAIR_LEN: usize = 64;
/// Ed25519 public key length.
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;
/// Ed25519 signature length.
pub const SIGNATURE_LEN: usize = 64;
/// SHA-256 / HMAC-SHA-256 output length.
pub const SHA256_LEN: usize = 32;
/// SHA-384 / HMAC-SHA-384 output length.
pub const SHA384_LEN: usize = 48;
/// SHA-512 / HMAC-SHA-512 output length.
pub const SHA512_LEN: usize = 64;

fn signing_key(secret: &[u8]) -> OperationResult<SigningKey> {
    match secret.len() {
        ED25519_SEED_LEN => {
            let mut seed = Zeroizing::new([0u8; ED25519_SEED_LEN]);
            seed.copy_from_slice(secret);
            Ok(SigningKey::from_bytes(&seed))
        },
        ED25519_KEYPAIR_LEN => {
            let mut keypair = Zeroizing::new([0u8; ED25519_KEYPAIR_LEN]);
            keypair.copy_from_slice(secret);
            SigningKey::from_keypair_bytes(&keypair)
                .map_err(|e| OperationError::Primitive(format!("ed25519 secret key: {e}")))
        },
        other => Err(OperationError::Primitive(format!(
            "ed25519 secret key of {other} bytes"
        ))),
    }
}

/// Sign `message` with a 32-byte seed or 64-byte keypair.
///
/// # Errors
///
/// Fails if a 64-byte keypair is internally inconsistent.
pub fn ed25519_sign(secret: &[u8], message: &[u8]) -> OperationResult<[u8; SIGNATURE_LEN]> {
    Ok(signing_key(secret)?.sign(message).to_bytes())
}

/// Derive the public key for a 32-byte seed or 64-byte keypair.
///
/// # Errors
///
/// Fails if a 64-byte keypair is internally inconsistent.
pub fn ed25519_public_key(secret: &[u8]) -> OperationResult<[u8; ED25519_PUBLIC_KEY_LEN]> {
    Ok(signing_key(secret)?.verifying_key().to_bytes())
}

/// Verify a detached signature.
///
/// # Errors
///
/// Fails if `public_key` does not decode to a curve point.
pub fn ed25519_verify(
    public_key: &[u8; ED25519_PUBLIC_KEY_LEN],
    message: &[u8],
    signature: &[u8; SIGNATURE_LEN],
) -> OperationResult<bool> {
    let verifying_key = VerifyingKey::from_bytes(public_key)
        .map_err(|e| OperationError::Primitive(format!("ed25519 public key: {e}")))?;
    let sig = DalekSignature::from_bytes(signature);
    Ok(verifying_key.verify(message, &sig).is_ok())
}

fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

/// SHA-256 digest.
#[must_use]
pub fn sha256(message: &[u8]) -> [u8; SHA256_LEN] {
    fixed(&Sha256::digest(message))
}

/// SHA-384 digest.
#[must_use]
pub fn sha384(message: &[u8]) -> [u8; SHA384_LEN] {
    fixed(&Sha384::digest(message))
}

/// SHA-512 digest.
#[must_use]
pub fn sha512(message: &[u8]) -> [u8; SHA512_LEN] {
    fixed(&Sha512::digest(message))
}

macro_rules! hmac_binding {
    ($(#[$meta:meta])* $name:ident, $hash:ty, $len:expr) => {
        $(#[$meta])*
        ///
        /// # Errors
        ///
        /// Fails only if the `hmac` crate rejects the key.
        pub fn $name(key: &[u8], message: &[u8]) -> OperationResult<[u8; $len]> {
            let mut mac = <Hmac<$hash> as Mac>::new_from_slice(key)
                .map_err(|e| OperationError::Primitive(format!("hmac key: {e}")))?;
            mac.update(message);
            Ok(fixed(&mac.finalize().into_bytes()))
        }
    };
}

hmac_binding!(
    /// HMAC-SHA-256 tag.
    hmac_sha256,
    Sha256,
    SHA256_LEN
);

hmac_binding!(
    /// HMAC-SHA-384 tag.
    hmac_sha384,
    Sha384,
    SHA384_LEN
);

hmac_binding!(
    /// HMAC-SHA-512 tag.
    hmac_sha512,
    Sha512,
    SHA512_LEN
);
