//! Hex digest helpers.
//!
//! [`hash_password`] produces the stored credential digest for user accounts;
//! [`sha256_hex`] names stored image files after their content.

use sha2::{Digest, Sha256, Sha512};

/// Compute the stored representation of a plaintext password.
///
/// SHA-512 over the UTF-8 bytes, rendered as 128 lower-case hex characters.
/// The output is deterministic so that login can recompute and compare it.
pub fn hash_password(plaintext: &str) -> String {
    let hash = Sha512::digest(plaintext.as_bytes());
    format!("{hash:x}")
}

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}
