//! Password hashing and verification.
//!
//! Uses Argon2id with the library's default parameters (fixed cost) and a
//! random per-password salt. Hashes are stored in PHC string format, so
//! the salt and parameters travel with the hash.

use crate::{PasswordError, Result};

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core},
};

/// Hash a password using Argon2id.
///
/// Returns the PHC-format hash string. Hashing an already-hashed value
/// would produce a hash of the hash, so callers must invoke this exactly
/// once per clear password, at the point where the password is set.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand_core::OsRng);

    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash {
            reason: e.to_string(),
        })?
        .to_string();

    Ok(password_hash)
}

/// Verify a candidate password against a stored PHC hash string.
///
/// Comparison is constant-time inside the argon2 crate.
pub fn verify_password(candidate: &str, password_hash: &str) -> Result<()> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|_| PasswordError::MalformedHash)?;

    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed_hash)
        .map_err(|_| PasswordError::Mismatch)
}
