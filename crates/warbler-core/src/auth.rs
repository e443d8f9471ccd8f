//! Password hashing helpers
//!
//! argon2id with a random per-hash salt, stored as a PHC string. Verification
//! parses the stored string, so parameter upgrades only affect new hashes.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use warbler_core_types::Sensitive;

use crate::errors::{Result, WarblerError};

/// Hash a password into an argon2id PHC string
///
/// # Errors
/// * `PasswordHash` - if the hasher fails (effectively unreachable with
///   default parameters)
pub fn hash_password(password: &Sensitive<String>) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map_err(|e| WarblerError::PasswordHash {
            reason: e.to_string(),
        })?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC string
///
/// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch.
///
/// # Errors
/// * `PasswordHash` - if the stored string is not a parseable PHC hash
pub fn verify_password(password: &Sensitive<String>, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| WarblerError::PasswordHash {
        reason: e.to_string(),
    })?;
    Ok(Argon2::default()
        .verify_password(password.expose().as_bytes(), &parsed)
        .is_ok())
}
