//! Argon2id password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

use super::AuthError;

/// Hash checked when the email is unknown, so a miss costs the same as a wrong password.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash("not-a-real-password-placeholder").ok());

/// Hash a password into a PHC string.
pub fn hash(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored PHC string.
///
/// Unparseable hashes never match.
pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Burn one verification against the dummy hash. Always false.
pub fn verify_dummy(password: &str) -> bool {
    if let Some(hashword) = DUMMY_HASH.as_deref() {
        let _ = verify(password, hashword);
    }
    false
}
