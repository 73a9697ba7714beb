//! Logging and tampering helpers for tests.

use tracing_subscriber::EnvFilter;

/// Set up test logging with the given filter.
///
/// Safe to call from every test; only the first call installs a
/// subscriber.
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn signs() {
///     sigil_test::setup_test_logging("sigil=debug");
///     // ...
/// }
/// ```
pub fn setup_test_logging(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .try_init();
}

/// Set up test logging at `warn`.
pub fn setup_test_logging_default() {
    setup_test_logging("warn");
}

const BIT_MASKS: [u8; 8] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];

/// Every single-bit corruption of `message`.
///
/// Yields `8 * message.len()` variants, one per bit. An empty message has no
/// bits to flip, so it yields a single variant with one byte appended.
pub fn tampered(message: &[u8]) -> Vec<Vec<u8>> {
    if message.is_empty() {
        return vec![vec![0x00]];
    }

    let mut variants = Vec::with_capacity(message.len().saturating_mul(8));
    for index in 0..message.len() {
        for mask in BIT_MASKS {
            let mut copy = message.to_vec();
            copy[index] ^= mask;
            variants.push(copy);
        }
    }
    variants
}
