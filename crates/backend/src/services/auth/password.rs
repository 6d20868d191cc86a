//! Password hashing and verification.
//!
//! Registration derives a salted Argon2id hash; login recomputes the hash
//! under the stored salt and compares in constant time. Verification never
//! errors for a wrong password, it only returns `false`.

use argon2::Argon2;
use rand::TryRngCore;
use rand::rngs::OsRng;

use rustwear_core::PasswordCredential;

use super::error::AuthError;

/// Salt length in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Derived hash length in bytes.
pub const HASH_LEN: usize = 32;

/// Derive a fresh salted hash for a password.
///
/// Generates a random per-user salt and an Argon2id hash under it; the
/// salt is never reused across users.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if the entropy source or the
/// derivation fails. Both are fatal rather than retryable.
pub fn create_password_hash(password: &str) -> Result<PasswordCredential, AuthError> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|_| AuthError::PasswordHash)?;

    let mut hash = [0u8; HASH_LEN];
    Argon2::default()
        .hash_password_into(password.as_bytes(), &salt, &mut hash)
        .map_err(|_| AuthError::PasswordHash)?;

    Ok(PasswordCredential::new(hash.to_vec(), salt.to_vec()))
}

/// Verify a password against a stored hash/salt pair.
///
/// Recomputes the hash under the stored salt and compares it to the stored
/// hash without early exit. Returns `false` on any mismatch, including
/// malformed stored material.
#[must_use]
pub fn verify_password_hash(password: &str, credential: &PasswordCredential) -> bool {
    let mut recomputed = [0u8; HASH_LEN];
    if Argon2::default()
        .hash_password_into(password.as_bytes(), credential.salt(), &mut recomputed)
        .is_err()
    {
        return false;
    }

    constant_time_compare(&recomputed, credential.hash())
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}
