//! Sigil - one async entry point for signing, authenticating and hashing.
//!
//! | Namespace | Operation | Output |
//! |---|---|---|
//! | `auth` | [`sign`](Auth::sign) | 64-byte Ed25519 `signature` |
//! | `auth` | [`mac`](Auth::mac) | 48-byte HMAC-SHA-384 `mac` |
//! | `util` | [`hash`](Util::hash) | 48-byte SHA-384 `hash` |
//! | `alt.auth` | [`hmacsha256`](AltAuth::hmacsha256), [`hmacsha512`](AltAuth::hmacsha512) | 32/64-byte `mac` |
//! | `alt.util` | [`sha256`](AltUtil::sha256), [`sha512`](AltUtil::sha512) | 32/64-byte `hash` |
//!
//! Every call returns `Result<_, OperationError>`. Bad arguments fail with
//! [`ErrorKind::InvalidInput`] before any primitive runs.
//!
//! # Example
//!
//! ```rust
//! use sigil::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> OperationResult<()> {
//! let sigil = Sigil::new();
//! let key = SecretKey::generate();
//! let public = key.public_key()?;
//!
//! let signed = sigil.auth().sign(Message::from(b"hello"), key).await?;
//! assert!(public.verify(b"hello", &signed.signature)?);
//!
//! // The same operation through the dynamic request path.
//! let response = sigil
//!     .respond(r#"{"operation": "alt.util.sha256", "message": "68656c6c6f"}"#)
//!     .await;
//! assert!(response.is_success());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod dispatch;
mod facade;
mod request;

pub use facade::{Alt, AltAuth, AltUtil, Auth, Sigil, Util};
pub use request::{ErrorBody, Request, Response};

pub use sigil_config::{Config, DispatchMode, DispatchSection};
pub use sigil_crypto::{
    Arguments, Authenticated, Digest, ErrorKind, Hashed, Input, MacKey, Message, Operation,
    OperationError, OperationResult, Output, PublicKey, SecretKey, Signature, Signed, Tag,
};
