//! Admin authentication: credential checks, session tokens and cookies.

mod credentials;
mod error;
mod issuer;
mod token;

pub mod cookies;
pub mod password;

pub use cookies::{CookiePolicy, SESSION_COOKIE, TOKEN_COOKIE};
pub use credentials::{normalize_email, validate_email_format, LoginCredentials};
pub use error::AuthError;
pub use issuer::{IssuedSession, SessionIssuer};
pub use token::{Claims, TokenSigner};

use serde::{Deserialize, Serialize};

/// Role carried by every token this service issues
pub const ADMIN_ROLE: &str = "admin";

/// Authenticated principal resolved from a verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub role: String,
    pub email: String,
}

impl Identity {
    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            role: ADMIN_ROLE.to_string(),
            email: email.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}
