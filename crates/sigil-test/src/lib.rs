//! Sigil Test - known-answer vectors and helpers for Sigil tests.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! sigil-test.workspace = true
//! ```
//!
//! ```rust,ignore
//! #[tokio::test]
//! async fn hashes_match() {
//!     sigil_test::setup_test_logging_default();
//!     for v in sigil_test::vectors::sha384().unwrap() {
//!         // compare against v.digest, reporting v.line on mismatch
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

mod error;
pub mod harness;
pub mod vectors;

pub use error::{VectorError, VectorResult};
pub use harness::*;
pub use vectors::{HashVector, MacVector, SignVector};
