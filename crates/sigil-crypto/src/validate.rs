//! Argument validation.
//!
//! Raw arguments are checked for presence, byte-coercibility and length
//! before any primitive runs. Every function here is pure: raw input in,
//! typed arguments or [`OperationError`] out.

use serde::{Deserialize, Deserializer, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{OperationError, OperationResult};
use crate::key::{MacKey, SecretKey};
use crate::message::Message;
use crate::primitives::{ED25519_KEYPAIR_LEN, ED25519_SEED_LEN};

/// Accepted Ed25519 secret key lengths.
pub const SECRET_KEY_LENGTHS: &[usize] = &[ED25519_SEED_LEN, ED25519_KEYPAIR_LEN];

/// A raw argument value.
///
/// On the wire a JSON string is read as hex and a JSON array as bytes.
/// An explicit `null` is kept as [`Input::Null`] so that a supplied-but-empty
/// argument is still seen as supplied. Contents are wiped on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(untagged)]
pub enum Input {
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Hex-encoded bytes.
    Hex(String),
    /// An explicit JSON `null`.
    Null,
}

impl Input {
    /// Coerce to bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidEncoding`] if a hex value does not
    /// decode or the value is `null`.
    pub fn into_bytes(mut self, argument: &'static str) -> OperationResult<Vec<u8>> {
        match &mut self {
            Self::Bytes(bytes) => Ok(std::mem::take(bytes)),
            Self::Hex(text) => {
                hex::decode(text.trim()).map_err(|e| OperationError::InvalidEncoding {
                    argument,
                    reason: e.to_string(),
                })
            },
            Self::Null => Err(OperationError::InvalidEncoding {
                argument,
                reason: "null is not a byte string".to_owned(),
            }),
        }
    }
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Inputs may carry key material.
        match self {
            Self::Bytes(b) => write!(f, "Input::Bytes({} bytes)", b.len()),
            Self::Hex(s) => write!(f, "Input::Hex({} chars)", s.len()),
            Self::Null => f.write_str("Input::Null"),
        }
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Input {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

/// Untyped arguments for one operation call.
///
/// An absent field is `None`; a field set to `null` is `Some(Input::Null)`.
/// Unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Arguments {
    /// The message; required by every operation.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<Input>,
    /// The key; required by sign and MAC operations, rejected by hashes.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub key: Option<Input>,
}

/// Deserialize a field that was written, `null` included, as `Some`.
///
/// Pair with `#[serde(default)]` so an absent field stays `None`.
///
/// # Errors
///
/// Returns the deserializer's error if the value is not an [`Input`].
pub fn present<'de, D>(deserializer: D) -> Result<Option<Input>, D::Error>
where
    D: Deserializer<'de>,
{
    Input::deserialize(deserializer).map(Some)
}

impl Arguments {
    /// Arguments carrying only a message.
    #[must_use]
    pub fn message(message: impl Into<Input>) -> Self {
        Self {
            message: Some(message.into()),
            key: None,
        }
    }

    /// Attach a key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<Input>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Check an Ed25519 secret key length.
///
/// # Errors
///
/// Returns [`OperationError::InvalidKeyLength`] unless `len` is 32 or 64.
pub fn secret_key_length(len: usize) -> OperationResult<()> {
    if SECRET_KEY_LENGTHS.contains(&len) {
        Ok(())
    } else {
        Err(OperationError::InvalidKeyLength {
            expected: SECRET_KEY_LENGTHS,
            actual: len,
        })
    }
}

fn require_message(message: Option<Input>) -> OperationResult<Message> {
    let input = message.ok_or(OperationError::MissingArgument("message"))?;
    input.into_bytes("message").map(Message::new)
}

/// Validate arguments for a signing operation.
///
/// # Errors
///
/// Missing message or key, undecodable hex, or a bad key length.
pub fn signing(args: Arguments) -> OperationResult<(Message, SecretKey)> {
    let Arguments { message, key } = args;
    let key = key.ok_or(OperationError::MissingArgument("key"))?;
    let message = require_message(message)?;
    let bytes = Zeroizing::new(key.into_bytes("key")?);
    let key = SecretKey::from_bytes(&bytes)?;
    Ok((message, key))
}

/// Validate arguments for a MAC operation.
///
/// # Errors
///
/// Missing message or key, or undecodable hex.
pub fn keyed(args: Arguments) -> OperationResult<(Message, MacKey)> {
    let Arguments { message, key } = args;
    let key = key.ok_or(OperationError::MissingArgument("key"))?;
    let message = require_message(message)?;
    let key = MacKey::new(key.into_bytes("key")?);
    Ok((message, key))
}

/// Validate arguments for a hash operation.
///
/// # Errors
///
/// Missing message, a key supplied, or undecodable hex.
pub fn keyless(args: Arguments) -> OperationResult<Message> {
    let Arguments { message, key } = args;
    if key.is_some() {
        return Err(OperationError::UnexpectedArgument("key"));
    }
    require_message(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    #[test]
    fn test_signing_requires_key() {
        let err = signing(Arguments::message(b"hi".as_slice())).unwrap_err();
        assert_eq!(err, OperationError::MissingArgument("key"));
    }

    #[test]
    fn test_signing_requires_message() {
        let args = Arguments {
            message: None,
            key: Some(Input::Hex(SEED.into())),
        };
        assert_eq!(
            signing(args).unwrap_err(),
            OperationError::MissingArgument("message")
        );
    }

    #[test]
    fn test_signing_rejects_short_key() {
        let args = Arguments::message(Vec::<u8>::new()).with_key(vec![0u8; 31]);
        assert!(matches!(
            signing(args),
            Err(OperationError::InvalidKeyLength { actual: 31, .. })
        ));
    }

    #[test]
    fn test_signing_accepts_both_key_forms() {
        let seed = Input::Hex(SEED.into());
        assert!(signing(Arguments::message(Vec::<u8>::new()).with_key(seed)).is_ok());

        let keypair = Input::Bytes(vec![1u8; 64]);
        let (_, key) = signing(Arguments::message(Vec::<u8>::new()).with_key(keypair)).unwrap();
        assert!(key.is_keypair());
    }

    #[test]
    fn test_keyed_requires_key() {
        let err = keyed(Arguments::message(b"data".as_slice())).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err, OperationError::MissingArgument("key"));
    }

    #[test]
    fn test_keyed_accepts_empty_key() {
        let (_, key) = keyed(Arguments::message(Vec::<u8>::new()).with_key(Vec::<u8>::new())).unwrap();
        assert!(key.is_empty());
    }

    #[test]
    fn test_keyless_rejects_key() {
        let args = Arguments::message(b"abc".as_slice()).with_key(b"k".as_slice());
        assert_eq!(
            keyless(args).unwrap_err(),
            OperationError::UnexpectedArgument("key")
        );
    }

    #[test]
    fn test_bad_hex_is_invalid_input() {
        let args = Arguments {
            message: Some(Input::Hex("zz".into())),
            key: None,
        };
        let err = keyless(args).unwrap_err();
        assert!(matches!(
            err,
            OperationError::InvalidEncoding {
                argument: "message",
                ..
            }
        ));
    }

    #[test]
    fn test_input_from_json() {
        let args: Arguments = serde_json::from_str(r#"{"message": "616263", "key": [1, 2, 3]}"#).unwrap();
        assert_eq!(args.message, Some(Input::Hex("616263".into())));
        assert_eq!(args.key, Some(Input::Bytes(vec![1, 2, 3])));
    }

    #[test]
    fn test_null_key_counts_as_supplied() {
        let args: Arguments = serde_json::from_str(r#"{"message": "616263", "key": null}"#).unwrap();
        assert_eq!(args.key, Some(Input::Null));
        assert_eq!(
            keyless(args).unwrap_err(),
            OperationError::UnexpectedArgument("key")
        );
    }

    #[test]
    fn test_null_message_is_invalid_encoding() {
        let args: Arguments = serde_json::from_str(r#"{"message": null}"#).unwrap();
        assert!(matches!(
            keyless(args).unwrap_err(),
            OperationError::InvalidEncoding {
                argument: "message",
                ..
            }
        ));
    }

    #[test]
    fn test_absent_fields_stay_none() {
        let args: Arguments = serde_json::from_str("{}").unwrap();
        assert_eq!(args, Arguments::default());
    }

    #[test]
    fn test_unknown_argument_rejected() {
        let parsed = serde_json::from_str::<Arguments>(r#"{"message": "00", "secretKey": "00"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_zeroize_clears_input() {
        let mut input = Input::Hex(SEED.into());
        input.zeroize();
        assert_eq!(input, Input::Hex(String::new()));

        let mut input = Input::Bytes(vec![7u8; 32]);
        input.zeroize();
        assert_eq!(input, Input::Bytes(Vec::new()));
    }

    #[test]
    fn test_input_debug_hides_content() {
        let input = Input::Hex(SEED.into());
        assert!(!format!("{input:?}").contains("9d61"));
    }
}
