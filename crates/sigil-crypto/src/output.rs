//! Success shapes.
//!
//! Every operation yields a record with exactly one named field holding its
//! output: [`Signed::signature`], [`Authenticated::mac`] or [`Hashed::hash`].
//! The dynamic request path folds these into [`Output`].

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::error::{OperationError, OperationResult};
use crate::primitives::SIGNATURE_LEN;

/// An Ed25519 signature (64 bytes).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    /// Create from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Try to create from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Primitive`] if the slice is not exactly 64 bytes.
    pub fn try_from_slice(slice: &[u8]) -> OperationResult<Self> {
        let bytes: [u8; SIGNATURE_LEN] = slice.try_into().map_err(|_| {
            OperationError::Primitive(format!(
                "signature must be {SIGNATURE_LEN} bytes, got {}",
                slice.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Get the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
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
    /// Returns an error if the string is not valid hex or not 64 bytes.
    pub fn from_hex(s: &str) -> OperationResult<Self> {
        let bytes = hex::decode(s).map_err(|e| OperationError::InvalidEncoding {
            argument: "signature",
            reason: e.to_string(),
        })?;
        Self::try_from_slice(&bytes)
    }

    /// Encode as base64 string.
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(self.0)
    }

    /// Decode from base64 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid base64 or not 64 bytes.
    pub fn from_base64(s: &str) -> OperationResult<Self> {
        use base64::Engine;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(s)
            .map_err(|e| OperationError::InvalidEncoding {
                argument: "signature",
                reason: e.to_string(),
            })?;
        Self::try_from_slice(&bytes)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}...)", &self.to_hex()[..16])
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Signature> for [u8; SIGNATURE_LEN] {
    fn from(sig: Signature) -> Self {
        sig.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Shared plumbing for fixed-width outputs.
macro_rules! fixed_output {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<const N: usize>([u8; N]);

        impl<const N: usize> $name<N> {
            /// Create from raw bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; N]) -> Self {
                Self(bytes)
            }

            /// Get the raw bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; N] {
                &self.0
            }

            /// Output width in bytes.
            #[must_use]
            pub const fn len(&self) -> usize {
                N
            }

            /// Always `false` for the widths this crate produces.
            #[must_use]
            pub const fn is_empty(&self) -> bool {
                N == 0
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
            /// Returns an error if the string is not valid hex or not `N` bytes.
            pub fn from_hex(s: &str) -> OperationResult<Self> {
                let bytes = hex::decode(s).map_err(|e| OperationError::InvalidEncoding {
                    argument: $label,
                    reason: e.to_string(),
                })?;
                let actual = bytes.len();
                let array: [u8; N] = bytes.try_into().map_err(|_| {
                    OperationError::Primitive(format!(
                        "{} must be {N} bytes, got {actual}",
                        $label
                    ))
                })?;
                Ok(Self(array))
            }
        }

        impl<const N: usize> fmt::Debug for $name<N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let hex = self.to_hex();
                write!(f, "{}({}...)", stringify!($name), &hex[..hex.len().min(16)])
            }
        }

        impl<const N: usize> fmt::Display for $name<N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_hex())
            }
        }

        impl<const N: usize> Serialize for $name<N> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de, const N: usize> Deserialize<'de> for $name<N> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }

        impl<const N: usize> From<[u8; N]> for $name<N> {
            fn from(bytes: [u8; N]) -> Self {
                Self(bytes)
            }
        }

        impl<const N: usize> AsRef<[u8]> for $name<N> {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

fixed_output!(
    /// An HMAC authentication tag of `N` bytes.
    Tag,
    "mac"
);

fixed_output!(
    /// A keyless digest of `N` bytes.
    Digest,
    "hash"
);

impl<const N: usize> Tag<N> {
    /// Compare against a received tag in constant time.
    ///
    /// A length mismatch is a plain `false`.
    #[must_use]
    pub fn verify(&self, received: &[u8]) -> bool {
        self.0.as_slice().ct_eq(received).into()
    }
}

/// Result of `auth.sign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signed {
    /// Detached Ed25519 signature.
    pub signature: Signature,
}

/// Result of a MAC operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authenticated<const N: usize> {
    /// Authentication tag.
    pub mac: Tag<N>,
}

/// Result of a hash operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashed<const N: usize> {
    /// Message digest.
    pub hash: Digest<N>,
}

/// Width-erased success value for the dynamic request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// From `auth.sign`.
    Signature(Signature),
    /// From any MAC operation.
    Mac(Vec<u8>),
    /// From any hash operation.
    Hash(Vec<u8>),
}

impl Output {
    /// Name of the record field this output travels under.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Signature(_) => "signature",
            Self::Mac(_) => "mac",
            Self::Hash(_) => "hash",
        }
    }

    /// Get the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Signature(sig) => sig.as_ref(),
            Self::Mac(bytes) | Self::Hash(bytes) => bytes.as_slice(),
        }
    }

    /// Encode the bytes as hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl Serialize for Output {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field(), &self.to_hex())?;
        map.end()
    }
}

impl From<Signed> for Output {
    fn from(signed: Signed) -> Self {
        Self::Signature(signed.signature)
    }
}

impl<const N: usize> From<Authenticated<N>> for Output {
    fn from(out: Authenticated<N>) -> Self {
        Self::Mac(out.mac.as_bytes().to_vec())
    }
}

impl<const N: usize> From<Hashed<N>> for Output {
    fn from(out: Hashed<N>) -> Self {
        Self::Hash(out.hash.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_encoding() {
        let sig = Signature::from_bytes([0xab; SIGNATURE_LEN]);

        let decoded = Signature::from_hex(&sig.to_hex()).unwrap();
        assert_eq!(sig, decoded);

        let decoded = Signature::from_base64(&sig.to_base64()).unwrap();
        assert_eq!(sig, decoded);
    }

    #[test]
    fn test_invalid_signature_length() {
        let result = Signature::try_from_slice(&[0u8; 63]);
        assert!(matches!(result, Err(OperationError::Primitive(_))));
    }

    #[test]
    fn test_tag_constant_time_compare() {
        let tag = Tag::from_bytes([7u8; 32]);
        assert!(tag.verify(&[7u8; 32]));

        let mut flipped = [7u8; 32];
        flipped[31] ^= 1;
        assert!(!tag.verify(&flipped));

        // Truncated tags never match
        assert!(!tag.verify(&[7u8; 16]));
    }

    #[test]
    fn test_digest_from_hex_checks_width() {
        assert!(Digest::<32>::from_hex(&"00".repeat(32)).is_ok());
        assert!(Digest::<32>::from_hex(&"00".repeat(48)).is_err());
    }

    #[test]
    fn test_record_field_names() {
        let hashed = Hashed {
            hash: Digest::from_bytes([1u8; 4]),
        };
        let json = serde_json::to_value(hashed).unwrap();
        assert_eq!(json, serde_json::json!({ "hash": "01010101" }));

        let mac = Authenticated {
            mac: Tag::from_bytes([2u8; 2]),
        };
        let json = serde_json::to_value(mac).unwrap();
        assert_eq!(json, serde_json::json!({ "mac": "0202" }));
    }

    #[test]
    fn test_output_shape() {
        let out = Output::from(Signed {
            signature: Signature::from_bytes([0u8; SIGNATURE_LEN]),
        });
        assert_eq!(out.field(), "signature");
        assert_eq!(out.as_bytes().len(), SIGNATURE_LEN);

        let json = serde_json::to_value(&out).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("signature"));
    }
}
