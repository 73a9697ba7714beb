//! Sigil Crypto - validated signing, MAC and hashing operations.
//!
//! This crate provides:
//! - Role-typed inputs ([`Message`], [`SecretKey`], [`MacKey`], [`PublicKey`])
//! - A validation layer that rejects bad arguments before any primitive runs
//! - One function per algorithm, grouped by namespace:
//!   [`auth`] and [`util`] (primary family), [`alt::auth`] and [`alt::util`]
//!   (alternate family)
//! - Named-field success records and a single [`OperationError`] type
//!
//! | Operation | Key | Field | Width |
//! |---|---|---|---|
//! | `auth.sign` | 32 or 64 B | `signature` | 64 B |
//! | `auth.mac` | any | `mac` | 48 B |
//! | `util.hash` | none | `hash` | 48 B |
//! | `alt.auth.hmacsha256` | any | `mac` | 32 B |
//! | `alt.auth.hmacsha512` | any | `mac` | 64 B |
//! | `alt.util.sha256` | none | `hash` | 32 B |
//! | `alt.util.sha512` | none | `hash` | 64 B |
//!
//! # Example
//!
//! ```
//! use sigil_crypto::{Message, SecretKey, auth, util};
//!
//! let key = SecretKey::generate();
//! let message = Message::from(b"important data");
//!
//! let signed = auth::sign(&message, &key).unwrap();
//! let public = key.public_key().unwrap();
//! assert!(public.verify(message.as_bytes(), &signed.signature).unwrap());
//!
//! let hashed = util::hash(&message).unwrap();
//! assert_eq!(hashed.hash.len(), 48);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod alt;
pub mod auth;
pub mod prelude;
pub mod primitives;
pub mod util;
pub mod validate;

mod error;
mod key;
mod message;
mod operation;
mod output;

pub use error::{ErrorKind, OperationError, OperationResult};
pub use key::{MacKey, PublicKey, SecretKey};
pub use message::Message;
pub use operation::{Invocation, KeyRequirement, Operation, invoke};
pub use output::{Authenticated, Digest, Hashed, Output, Signature, Signed, Tag};
pub use validate::{Arguments, Input};
