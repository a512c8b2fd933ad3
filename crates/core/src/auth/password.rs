//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings, so the salt travels inside the stored value.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Password shorter than the configured minimum.
    #[error("password must be at least {min} characters")]
    TooShort {
        /// Configured minimum length.
        min: usize,
    },

    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password.
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format.
    #[error("invalid password hash format")]
    InvalidHash,
}

/// Checks a new password against the configured minimum length (in characters).
///
/// # Errors
///
/// Returns `PasswordError::TooShort` if the password is too short.
pub fn ensure_password_length(password: &str, min: usize) -> Result<(), PasswordError> {
    if password.chars().count() < min {
        return Err(PasswordError::TooShort { min });
    }
    Ok(())
}

/// Hashes a password using Argon2id.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
///
/// # Example
///
/// ```
/// use kontor_core::auth::hash_password;
///
/// let hash = hash_password("geheim123").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored PHC hash.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the hash format is invalid.
/// Returns `PasswordError::VerifyError` if verification fails unexpectedly.
///
/// # Example
///
/// ```
/// use kontor_core::auth::{hash_password, verify_password};
///
/// let hash = hash_password("geheim123").unwrap();
/// assert!(verify_password("geheim123", &hash).unwrap());
/// assert!(!verify_password("falsch", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}
