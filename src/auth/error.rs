use std::collections::HashMap;

use thiserror::Error;

use crate::database::DatabaseError;

/// Errors produced by the credential check and token issuing path.
///
/// Matched exhaustively at the HTTP boundary (`impl From<AuthError> for ApiError`).
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed login input, keyed by field name
    #[error("invalid login input")]
    InvalidInput(HashMap<String, String>),

    /// Wrong password or unknown email. Deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No signing secret configured
    #[error("session signing secret is not configured")]
    MissingSecret,

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("password hashing error")]
    PasswordHash,

    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("admin store error: {0}")]
    Store(#[from] DatabaseError),
}
