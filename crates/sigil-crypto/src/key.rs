//! Key material newtypes.
//!
//! Secret material is zeroized on drop and never printed. Each role gets its
//! own type so a MAC key cannot be handed to a signing operation (or the key
//! and message swapped) without a compile error.

use std::fmt;

use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{OperationError, OperationResult};
use crate::output::Signature;
use crate::primitives::{self, ED25519_KEYPAIR_LEN, ED25519_PUBLIC_KEY_LEN, ED25519_SEED_LEN};
use crate::validate;

/// An Ed25519 secret key.
///
/// Accepts both conventions in circulation: the 32-byte seed, and the
/// 64-byte `seed || public key` form. The length is checked at
/// construction; whether a 64-byte key is internally consistent is left to
/// the primitive, which rejects it at signing time.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Generate a fresh random seed.
    #[must_use]
    pub fn generate() -> Self {
        let mut seed = [0u8; ED25519_SEED_LEN];
        OsRng.fill_bytes(&mut seed);
        let key = Self(seed.to_vec());
        seed.zeroize();
        key
    }

    /// Create from a 32-byte seed or 64-byte keypair.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidKeyLength`] for any other length.
    pub fn from_bytes(bytes: &[u8]) -> OperationResult<Self> {
        validate::secret_key_length(bytes.len())?;
        Ok(Self(bytes.to_vec()))
    }

    /// Decode from hex string.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidEncoding`] for bad hex and
    /// [`OperationError::InvalidKeyLength`] for a bad length.
    pub fn from_hex(s: &str) -> OperationResult<Self> {
        let bytes = Zeroizing::new(hex::decode(s).map_err(|e| {
            OperationError::InvalidEncoding {
                argument: "key",
                reason: e.to_string(),
            }
        })?);
        Self::from_bytes(&bytes)
    }

    /// Length of the key material (32 or 64).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this key is in the 64-byte `seed || public key` form.
    #[must_use]
    pub fn is_keypair(&self) -> bool {
        self.0.len() == ED25519_KEYPAIR_LEN
    }

    /// Derive the matching public key.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Primitive`] if a 64-byte key carries a
    /// public half that does not belong to its seed.
    pub fn public_key(&self) -> OperationResult<PublicKey> {
        primitives::ed25519_public_key(&self.0).map(PublicKey)
    }

    /// Export the secret bytes (careful - sensitive!).
    #[must_use]
    pub fn expose_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({} bytes, [REDACTED])", self.0.len())
    }
}

/// An HMAC key of any length.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MacKey(Vec<u8>);

impl MacKey {
    /// Wrap owned key bytes.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
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
                argument: "key",
                reason: e.to_string(),
            })
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Export the key bytes (careful - sensitive!).
    #[must_use]
    pub fn expose_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for MacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacKey({} bytes, [REDACTED])", self.0.len())
    }
}

impl From<&[u8]> for MacKey {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for MacKey {
    fn from(bytes: &[u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for MacKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// An Ed25519 public key (safe to share, serialize, etc.).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; ED25519_PUBLIC_KEY_LEN]);

impl PublicKey {
    /// Create from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ED25519_PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Try to create from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidKeyLength`] if the slice is not exactly 32 bytes.
    pub fn try_from_slice(slice: &[u8]) -> OperationResult<Self> {
        let bytes: [u8; ED25519_PUBLIC_KEY_LEN] =
            slice
                .try_into()
                .map_err(|_| OperationError::InvalidKeyLength {
                    expected: &[ED25519_PUBLIC_KEY_LEN],
                    actual: slice.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Get the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Encode as hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Decode from hex string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid hex or not 32 bytes.
    pub fn from_hex(s: &str) -> OperationResult<Self> {
        let bytes = hex::decode(s).map_err(|e| OperationError::InvalidEncoding {
            argument: "public_key",
            reason: e.to_string(),
        })?;
        Self::try_from_slice(&bytes)
    }

    /// Check a signature over `message` against this key.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not verify.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Primitive`] if these bytes are not a valid
    /// curve point.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> OperationResult<bool> {
        primitives::ed25519_verify(&self.0, message, signature.as_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
