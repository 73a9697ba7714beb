//! Prelude module - commonly used types for convenient import.
//!
//! Use `use sigil_crypto::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust
//! use sigil_crypto::prelude::*;
//!
//! let key = MacKey::from(b"Jefe");
//! let out = auth::mac(&Message::from(b"what do ya want for nothing?"), &key).unwrap();
//! assert_eq!(out.mac.len(), 48);
//! ```

// Errors
pub use crate::{ErrorKind, OperationError, OperationResult};

// Inputs
pub use crate::{Arguments, Input, MacKey, Message, PublicKey, SecretKey};

// Outputs
pub use crate::{Authenticated, Digest, Hashed, Output, Signature, Signed, Tag};

// Dispatch
pub use crate::{Invocation, Operation, invoke};

// Namespaces
pub use crate::{alt, auth, util};
