//! Password hashing.

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash(#[source] password_hash::Error),

    #[error("stored password hash is malformed")]
    MalformedHash(#[source] password_hash::Error),
}

/// Hash a plain-text password into an Argon2id PHC string.
///
/// # Errors
///
/// Returns an error if Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

/// Check `password` against a stored PHC string.
///
/// # Errors
///
/// Returns an error if `encrypted` is not a valid PHC string. A wrong password is `Ok(false)`.
pub fn verify_password(password: &str, encrypted: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(encrypted).map_err(PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(error) => Err(PasswordError::MalformedHash(error)),
    }
}
