//! Prelude module - commonly used types for convenient import.
//!
//! Use `use sigil::prelude::*;` to import all essential types.

// Facade
pub use crate::{Request, Response, Sigil};

// Keys, messages and outputs
pub use crate::{MacKey, Message, PublicKey, SecretKey, Signature};
pub use crate::{Authenticated, Hashed, Output, Signed};

// Dynamic path
pub use crate::{Arguments, Input, Operation};

// Errors
pub use crate::{ErrorKind, OperationError, OperationResult};
