//! Content hashing for fingerprinted filenames.
//!
//! Fingerprints are the leading hex characters of an MD5 digest of the file's
//! raw bytes. Seven characters (28 bits) is enough to bust caches reliably in
//! practice while keeping filenames short; strong collision resistance is an
//! explicit non-goal of the fingerprint.

use md5::{Digest, Md5};

/// Number of leading hex characters used in fingerprinted filenames.
pub const DEFAULT_HASH_LEN: usize = 7;

/// Hex MD5 digest of `bytes`, truncated to the leading `len` characters.
///
/// Operates on raw bytes, never on decoded text, so the digest is stable for
/// files containing non-UTF8 content. A `len` beyond the full digest (32 hex
/// chars) returns the full digest.
pub fn content_hash(bytes: &[u8], len: usize) -> String {
    let mut hex = format!("{:x}", Md5::digest(bytes));
    hex.truncate(len);
    hex
}

/// Default-length fingerprint of `bytes`.
pub fn fingerprint(bytes: &[u8]) -> String {
    content_hash(bytes, DEFAULT_HASH_LEN)
}
