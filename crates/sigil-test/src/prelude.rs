//! Prelude module - commonly used types for convenient import.
//!
//! Use `use sigil_test::prelude::*;` in test files.

pub use crate::{HashVector, MacVector, SignVector, VectorError, VectorResult};

pub use crate::{setup_test_logging, setup_test_logging_default, tampered};

pub use crate::vectors;
