//! Known-answer vectors.
//!
//! Each set is a text file of colon-separated hex fields, one vector per
//! line:
//!
//! - Ed25519: `secret key:public key:message:signature||message:`, the
//!   layout of djb's `sign.input`. The secret key is the 32-byte seed or the
//!   64-byte `seed || public key`.
//! - HMAC: `key:message:tag`
//! - Hash: `message:digest`
//!
//! Blank lines are skipped. Line numbers in errors are 1-based.

use crate::error::{VectorError, VectorResult};

/// Ed25519: RFC 8032 tests 1-3, then one vector per message length.
pub const ED25519: &str = include_str!("../vectors/ed25519.vec");
/// HMAC-SHA-256: RFC 4231 plus key and message length edges.
pub const HMACSHA256: &str = include_str!("../vectors/hmacsha256.vec");
/// HMAC-SHA-384: RFC 4231 plus key and message length edges.
pub const HMACSHA384: &str = include_str!("../vectors/hmacsha384.vec");
/// HMAC-SHA-512: RFC 4231 plus key and message length edges.
pub const HMACSHA512: &str = include_str!("../vectors/hmacsha512.vec");
/// SHA-256: empty message, FIPS 180 examples, then generated lengths.
pub const SHA256: &str = include_str!("../vectors/sha256.vec");
/// SHA-384: empty message, FIPS 180 examples, then generated lengths.
pub const SHA384: &str = include_str!("../vectors/sha384.vec");
/// SHA-512: empty message, FIPS 180 examples, then generated lengths.
pub const SHA512: &str = include_str!("../vectors/sha512.vec");

const SEED_LEN: usize = 32;
const PUBLIC_KEY_LEN: usize = 32;
const KEYPAIR_LEN: usize = 64;
const SIGNATURE_LEN: usize = 64;

/// One Ed25519 signing vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignVector {
    /// Source line.
    pub line: usize,
    /// Secret key as written in the file: 32-byte seed or 64-byte
    /// `seed || public key`.
    pub secret_key: Vec<u8>,
    /// Public key derived from the seed.
    pub public_key: [u8; PUBLIC_KEY_LEN],
    /// Signed message.
    pub message: Vec<u8>,
    /// Expected signature.
    pub signature: [u8; SIGNATURE_LEN],
}

impl SignVector {
    /// The 32-byte seed.
    #[must_use]
    pub fn seed(&self) -> [u8; SEED_LEN] {
        let mut seed = [0u8; SEED_LEN];
        seed.copy_from_slice(&self.secret_key[..SEED_LEN]);
        seed
    }

    /// The 64-byte `seed || public key` form of the secret key.
    #[must_use]
    pub fn keypair(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(SEED_LEN.saturating_add(PUBLIC_KEY_LEN));
        bytes.extend_from_slice(&self.seed());
        bytes.extend_from_slice(&self.public_key);
        bytes
    }
}

/// One HMAC vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacVector {
    /// Source line.
    pub line: usize,
    /// HMAC key, any length.
    pub key: Vec<u8>,
    /// Authenticated message.
    pub message: Vec<u8>,
    /// Expected tag.
    pub tag: Vec<u8>,
}

/// One digest vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashVector {
    /// Source line.
    pub line: usize,
    /// Hashed message.
    pub message: Vec<u8>,
    /// Expected digest.
    pub digest: Vec<u8>,
}

/// Parse an Ed25519 vector set.
///
/// # Errors
///
/// Returns a [`VectorError`] naming the first bad line.
pub fn parse_sign(set: &'static str, text: &str) -> VectorResult<Vec<SignVector>> {
    lines(text)
        .map(|(line, content)| {
            let fields = split(set, line, content, 5)?;
            if !fields[4].is_empty() {
                return Err(malformed(set, line, "trailing field must be empty".to_owned()));
            }

            let secret_key = decode(set, line, "secret key", fields[0])?;
            let public_key: [u8; PUBLIC_KEY_LEN] = fixed(
                set,
                line,
                "public key",
                &decode(set, line, "public key", fields[1])?,
            )?;
            match secret_key.len() {
                SEED_LEN => {},
                KEYPAIR_LEN => {
                    if secret_key[SEED_LEN..] != public_key {
                        return Err(malformed(
                            set,
                            line,
                            "secret key does not end with the public key".to_owned(),
                        ));
                    }
                },
                other => {
                    return Err(malformed(
                        set,
                        line,
                        format!("secret key is {other} bytes, expected {SEED_LEN} or {KEYPAIR_LEN}"),
                    ));
                },
            }
            let message = decode(set, line, "message", fields[2])?;
            let signed = decode(set, line, "signed message", fields[3])?;

            let Some((signature, echoed)) = signed.split_at_checked(SIGNATURE_LEN) else {
                return Err(malformed(
                    set,
                    line,
                    format!("signed message is {} bytes, shorter than a signature", signed.len()),
                ));
            };
            if echoed != message.as_slice() {
                return Err(malformed(
                    set,
                    line,
                    "signed message does not end with the message".to_owned(),
                ));
            }

            Ok(SignVector {
                line,
                secret_key,
                public_key,
                signature: fixed(set, line, "signature", signature)?,
                message,
            })
        })
        .collect()
}

/// Parse an HMAC vector set whose tags are `tag_len` bytes.
///
/// # Errors
///
/// Returns a [`VectorError`] naming the first bad line.
pub fn parse_mac(set: &'static str, text: &str, tag_len: usize) -> VectorResult<Vec<MacVector>> {
    lines(text)
        .map(|(line, content)| {
            let fields = split(set, line, content, 3)?;
            let tag = decode(set, line, "tag", fields[2])?;
            width(set, line, "tag", &tag, tag_len)?;
            Ok(MacVector {
                line,
                key: decode(set, line, "key", fields[0])?,
                message: decode(set, line, "message", fields[1])?,
                tag,
            })
        })
        .collect()
}

/// Parse a hash vector set whose digests are `digest_len` bytes.
///
/// # Errors
///
/// Returns a [`VectorError`] naming the first bad line.
pub fn parse_hash(
    set: &'static str,
    text: &str,
    digest_len: usize,
) -> VectorResult<Vec<HashVector>> {
    lines(text)
        .map(|(line, content)| {
            let fields = split(set, line, content, 2)?;
            let digest = decode(set, line, "digest", fields[1])?;
            width(set, line, "digest", &digest, digest_len)?;
            Ok(HashVector {
                line,
                message: decode(set, line, "message", fields[0])?,
                digest,
            })
        })
        .collect()
}

/// The embedded Ed25519 set.
///
/// # Errors
///
/// Only if the embedded file is corrupt.
pub fn ed25519() -> VectorResult<Vec<SignVector>> {
    parse_sign("ed25519", ED25519)
}

/// The embedded HMAC-SHA-256 set.
///
/// # Errors
///
/// Only if the embedded file is corrupt.
pub fn hmacsha256() -> VectorResult<Vec<MacVector>> {
    parse_mac("hmacsha256", HMACSHA256, 32)
}

/// The embedded HMAC-SHA-384 set.
///
/// # Errors
///
/// Only if the embedded file is corrupt.
pub fn hmacsha384() -> VectorResult<Vec<MacVector>> {
    parse_mac("hmacsha384", HMACSHA384, 48)
}

/// The embedded HMAC-SHA-512 set.
///
/// # Errors
///
/// Only if the embedded file is corrupt.
pub fn hmacsha512() -> VectorResult<Vec<MacVector>> {
    parse_mac("hmacsha512", HMACSHA512, 64)
}

/// The embedded SHA-256 set.
///
/// # Errors
///
/// Only if the embedded file is corrupt.
pub fn sha256() -> VectorResult<Vec<HashVector>> {
    parse_hash("sha256", SHA256, 32)
}

/// The embedded SHA-384 set.
///
/// # Errors
///
/// Only if the embedded file is corrupt.
pub fn sha384() -> VectorResult<Vec<HashVector>> {
    parse_hash("sha384", SHA384, 48)
}

/// The embedded SHA-512 set.
///
/// # Errors
///
/// Only if the embedded file is corrupt.
pub fn sha512() -> VectorResult<Vec<HashVector>> {
    parse_hash("sha512", SHA512, 64)
}

fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(index, raw)| {
        let content = raw.trim();
        (!content.is_empty()).then_some((index.saturating_add(1), content))
    })
}

fn split<'a>(
    set: &'static str,
    line: usize,
    content: &'a str,
    expected: usize,
) -> VectorResult<Vec<&'a str>> {
    let fields: Vec<&str> = content.split(':').collect();
    if fields.len() == expected {
        Ok(fields)
    } else {
        Err(VectorError::FieldCount {
            set,
            line,
            expected,
            actual: fields.len(),
        })
    }
}

fn decode(set: &'static str, line: usize, field: &'static str, value: &str) -> VectorResult<Vec<u8>> {
    hex::decode(value).map_err(|source| VectorError::Hex {
        set,
        line,
        field,
        source,
    })
}

fn width(
    set: &'static str,
    line: usize,
    field: &'static str,
    bytes: &[u8],
    expected: usize,
) -> VectorResult<()> {
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(malformed(
            set,
            line,
            format!("{field} is {} bytes, expected {expected}", bytes.len()),
        ))
    }
}

fn fixed<const N: usize>(
    set: &'static str,
    line: usize,
    field: &'static str,
    bytes: &[u8],
) -> VectorResult<[u8; N]> {
    bytes.try_into().map_err(|_| {
        malformed(
            set,
            line,
            format!("{field} is {} bytes, expected {N}", bytes.len()),
        )
    })
}

fn malformed(set: &'static str, line: usize, reason: String) -> VectorError {
    VectorError::Malformed { set, line, reason }
}
