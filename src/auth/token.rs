use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::{AuthError, Identity};
use crate::config::SecurityConfig;

/// Signed session payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub role: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(identity: &Identity, ttl: Duration) -> Self {
        Self::issued_at(identity, Utc::now(), ttl)
    }

    pub fn issued_at(identity: &Identity, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            role: identity.role.clone(),
            email: identity.email.clone(),
            iat: issued_at.timestamp(),
            exp: issued_at
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
                .timestamp(),
        }
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            role: claims.role,
            email: claims.email,
        }
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// HS256 signer/verifier for session tokens.
///
/// Built from an explicit secret. Without one, issuing fails with
/// [`AuthError::MissingSecret`] and every token verifies as anonymous.
pub struct TokenSigner {
    keys: Option<Keys>,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: Option<&str>, ttl: Duration) -> Self {
        let keys = secret.filter(|s| !s.is_empty()).map(|s| Keys {
            encoding: EncodingKey::from_secret(s.as_bytes()),
            decoding: DecodingKey::from_secret(s.as_bytes()),
        });

        Self { keys, ttl }
    }

    pub fn from_config(security: &SecurityConfig) -> Self {
        Self::new(security.jwt_secret.as_deref(), security.session_ttl())
    }

    pub fn is_configured(&self) -> bool {
        self.keys.is_some()
    }

    /// Sign a fresh token for `identity`, valid for the configured ttl
    pub fn issue(&self, identity: &Identity) -> Result<String, AuthError> {
        self.encode(&Claims::new(identity, self.ttl))
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        let keys = self.keys.as_ref().ok_or(AuthError::MissingSecret)?;
        Ok(encode(&Header::new(Algorithm::HS256), claims, &keys.encoding)?)
    }

    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let keys = self.keys.as_ref().ok_or(AuthError::MissingSecret)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &keys.decoding, &validation)?;
        Ok(data.claims)
    }

    /// Resolve a token to an identity. Bad signature, expiry, malformed input
    /// and a missing secret all come back as `None`.
    pub fn verify(&self, token: &str) -> Option<Identity> {
        match self.decode(token) {
            Ok(claims) => Some(claims.into()),
            Err(e) => {
                tracing::debug!("Rejected session token: {}", e);
                None
            }
        }
    }
}
