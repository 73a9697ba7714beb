//! Alternate family: HMAC and digests over SHA-256 and SHA-512.

pub mod auth;
pub mod util;
