//! The closed set of facade operations.
//!
//! [`Operation`] names every operation once. [`Invocation`] is the only
//! place an operation name turns into work. Its matches are exhaustive, so a
//! new variant cannot compile until it is wired to a module function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OperationError, OperationResult};
use crate::key::{MacKey, SecretKey};
use crate::message::Message;
use crate::output::Output;
use crate::primitives::{SHA256_LEN, SHA384_LEN, SHA512_LEN, SIGNATURE_LEN};
use crate::validate::{self, Arguments};
use crate::{alt, auth, util};

/// What kind of key an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRequirement {
    /// Ed25519 secret key, 32 or 64 bytes.
    Secret,
    /// HMAC key, any length.
    Mac,
    /// No key; supplying one is an error.
    None,
}

/// A facade operation, addressed by namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operation {
    /// `auth.sign`
    Sign,
    /// `auth.mac`
    Mac,
    /// `util.hash`
    Hash,
    /// `alt.auth.hmacsha256`
    HmacSha256,
    /// `alt.auth.hmacsha512`
    HmacSha512,
    /// `alt.util.sha256`
    Sha256,
    /// `alt.util.sha512`
    Sha512,
}

impl Operation {
    /// Every operation, primary family first.
    pub const ALL: [Self; 7] = [
        Self::Sign,
        Self::Mac,
        Self::Hash,
        Self::HmacSha256,
        Self::HmacSha512,
        Self::Sha256,
        Self::Sha512,
    ];

    /// Dotted namespace path, e.g. `alt.util.sha256`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sign => "auth.sign",
            Self::Mac => "auth.mac",
            Self::Hash => "util.hash",
            Self::HmacSha256 => "alt.auth.hmacsha256",
            Self::HmacSha512 => "alt.auth.hmacsha512",
            Self::Sha256 => "alt.util.sha256",
            Self::Sha512 => "alt.util.sha512",
        }
    }

    /// Key this operation requires.
    #[must_use]
    pub const fn key_requirement(self) -> KeyRequirement {
        match self {
            Self::Sign => KeyRequirement::Secret,
            Self::Mac | Self::HmacSha256 | Self::HmacSha512 => KeyRequirement::Mac,
            Self::Hash | Self::Sha256 | Self::Sha512 => KeyRequirement::None,
        }
    }

    /// Record field the output is delivered under.
    #[must_use]
    pub const fn output_field(self) -> &'static str {
        match self.key_requirement() {
            KeyRequirement::Secret => "signature",
            KeyRequirement::Mac => "mac",
            KeyRequirement::None => "hash",
        }
    }

    /// Output width in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sign => SIGNATURE_LEN,
            Self::Mac | Self::Hash => SHA384_LEN,
            Self::HmacSha256 | Self::Sha256 => SHA256_LEN,
            Self::HmacSha512 | Self::Sha512 => SHA512_LEN,
        }
    }

    /// Whether this operation belongs to the `alt` namespace.
    #[must_use]
    pub const fn is_alternate(self) -> bool {
        !matches!(self, Self::Sign | Self::Mac | Self::Hash)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| OperationError::UnknownOperation(s.to_owned()))
    }
}

impl TryFrom<String> for Operation {
    type Error = OperationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operation> for String {
    fn from(op: Operation) -> Self {
        op.name().to_owned()
    }
}

/// An operation whose arguments have passed validation.
///
/// Splitting [`Invocation::prepare`] from [`Invocation::run`] lets a caller
/// learn the message length, or fail fast on bad input, before scheduling
/// the primitive work.
pub struct Invocation {
    operation: Operation,
    prepared: Prepared,
}

enum Prepared {
    Sign(Message, SecretKey),
    Mac(Message, MacKey),
    Hash(Message),
    HmacSha256(Message, MacKey),
    HmacSha512(Message, MacKey),
    Sha256(Message),
    Sha512(Message),
}

impl Invocation {
    /// Validate `args` for `operation`.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidInput`](crate::ErrorKind::InvalidInput) for
    /// missing, unexpected or undecodable arguments and bad key lengths.
    pub fn prepare(operation: Operation, args: Arguments) -> OperationResult<Self> {
        let prepared = match operation {
            Operation::Sign => {
                let (message, key) = validate::signing(args)?;
                Prepared::Sign(message, key)
            },
            Operation::Mac => {
                let (message, key) = validate::keyed(args)?;
                Prepared::Mac(message, key)
            },
            Operation::Hash => Prepared::Hash(validate::keyless(args)?),
            Operation::HmacSha256 => {
                let (message, key) = validate::keyed(args)?;
                Prepared::HmacSha256(message, key)
            },
            Operation::HmacSha512 => {
                let (message, key) = validate::keyed(args)?;
                Prepared::HmacSha512(message, key)
            },
            Operation::Sha256 => Prepared::Sha256(validate::keyless(args)?),
            Operation::Sha512 => Prepared::Sha512(validate::keyless(args)?),
        };
        Ok(Self {
            operation,
            prepared,
        })
    }

    /// The operation this invocation runs.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Length of the validated message in bytes.
    #[must_use]
    pub fn message_len(&self) -> usize {
        match &self.prepared {
            Prepared::Sign(message, _)
            | Prepared::Mac(message, _)
            | Prepared::HmacSha256(message, _)
            | Prepared::HmacSha512(message, _)
            | Prepared::Hash(message)
            | Prepared::Sha256(message)
            | Prepared::Sha512(message) => message.len(),
        }
    }

    /// Run the primitive.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::PrimitiveFailure`](crate::ErrorKind::PrimitiveFailure)
    /// if the primitive rejects the validated arguments.
    pub fn run(self) -> OperationResult<Output> {
        match self.prepared {
            Prepared::Sign(message, key) => auth::sign(&message, &key).map(Output::from),
            Prepared::Mac(message, key) => auth::mac(&message, &key).map(Output::from),
            Prepared::Hash(message) => util::hash(&message).map(Output::from),
            Prepared::HmacSha256(message, key) => {
                alt::auth::hmacsha256(&message, &key).map(Output::from)
            },
            Prepared::HmacSha512(message, key) => {
                alt::auth::hmacsha512(&message, &key).map(Output::from)
            },
            Prepared::Sha256(message) => alt::util::sha256(&message).map(Output::from),
            Prepared::Sha512(message) => alt::util::sha512(&message).map(Output::from),
        }
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("operation", &self.operation)
            .field("message_len", &self.message_len())
            .finish_non_exhaustive()
    }
}

/// Validate raw arguments and run `operation`.
///
/// Validation completes before any primitive is touched.
///
/// # Errors
///
/// [`ErrorKind::InvalidInput`](crate::ErrorKind::InvalidInput) for bad
/// arguments, [`ErrorKind::PrimitiveFailure`](crate::ErrorKind::PrimitiveFailure)
/// if the primitive rejects them.
pub fn invoke(operation: Operation, args: Arguments) -> OperationResult<Output> {
    Invocation::prepare(operation, args)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::validate::Input;

    #[test]
    fn test_names_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "auth.sha1".parse::<Operation>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_output_width_matches_invoke() {
        for op in Operation::ALL {
            let mut args = Arguments::message(b"width".as_slice());
            match op.key_requirement() {
                KeyRequirement::Secret => args = args.with_key(vec![3u8; 32]),
                KeyRequirement::Mac => args = args.with_key(b"k".as_slice()),
                KeyRequirement::None => {},
            }
            let out = invoke(op, args).unwrap();
            assert_eq!(out.as_bytes().len(), op.output_len(), "{op}");
            assert_eq!(out.field(), op.output_field(), "{op}");
        }
    }

    #[test]
    fn test_key_rejected_by_every_hash() {
        for op in Operation::ALL {
            if op.key_requirement() != KeyRequirement::None {
                continue;
            }
            let args = Arguments::message(b"abc".as_slice()).with_key(b"k".as_slice());
            assert_eq!(
                invoke(op, args).unwrap_err(),
                OperationError::UnexpectedArgument("key"),
                "{op}"
            );
        }
    }

    #[test]
    fn test_missing_key_rejected_by_every_keyed_op() {
        for op in Operation::ALL {
            if op.key_requirement() == KeyRequirement::None {
                continue;
            }
            let err = invoke(op, Arguments::message(b"abc".as_slice())).unwrap_err();
            assert_eq!(err, OperationError::MissingArgument("key"), "{op}");
        }
    }

    #[test]
    fn test_hex_arguments() {
        let args = Arguments {
            message: Some(Input::Hex("616263".into())),
            key: None,
        };
        let out = invoke(Operation::Sha256, args).unwrap();
        assert_eq!(
            out.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_prepare_reports_message_len() {
        let args = Arguments::message(vec![0u8; 40]).with_key(b"k".as_slice());
        let invocation = Invocation::prepare(Operation::HmacSha256, args).unwrap();
        assert_eq!(invocation.operation(), Operation::HmacSha256);
        assert_eq!(invocation.message_len(), 40);
        assert_eq!(invocation.run().unwrap().as_bytes().len(), 32);
    }

    #[test]
    fn test_prepare_fails_before_run() {
        let err = Invocation::prepare(Operation::Sign, Arguments::message(Vec::<u8>::new()))
            .unwrap_err();
        assert_eq!(err, OperationError::MissingArgument("key"));
    }

    #[test]
    fn test_invocation_debug_hides_key() {
        let args = Arguments::message(b"abc".as_slice()).with_key(vec![0x5au8; 32]);
        let invocation = Invocation::prepare(Operation::Sign, args).unwrap();
        let shown = format!("{invocation:?}");
        assert!(shown.contains("message_len: 3"));
        assert!(!shown.contains("5a"));
    }

    #[test]
    fn test_serde_as_name() {
        let json = serde_json::to_string(&Operation::HmacSha512).unwrap();
        assert_eq!(json, "\"alt.auth.hmacsha512\"");
        let op: Operation = serde_json::from_str("\"util.hash\"").unwrap();
        assert_eq!(op, Operation::Hash);
        assert!(serde_json::from_str::<Operation>("\"util.md5\"").is_err());
    }
}
