use std::sync::Arc;

use tracing::{info, warn};

use super::{password, AuthError, Identity, LoginCredentials, TokenSigner};
use crate::database::AdminStore;

/// A signed token together with the identity it encodes
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub identity: Identity,
}

/// Checks admin credentials and signs session tokens
#[derive(Clone)]
pub struct SessionIssuer {
    store: Arc<dyn AdminStore>,
    signer: Arc<TokenSigner>,
}

impl SessionIssuer {
    pub fn new(store: Arc<dyn AdminStore>, signer: Arc<TokenSigner>) -> Self {
        Self { store, signer }
    }

    /// Verify email/password against the stored hash and issue a session.
    ///
    /// Unknown email and wrong password both yield [`AuthError::InvalidCredentials`]
    /// after the same amount of hashing work.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedSession, AuthError> {
        let record = self.store.find_by_email(&credentials.email).await?;

        let password = credentials.password.clone();
        let stored_hash = record.as_ref().map(|r| r.password_hash.clone());
        let matches = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hashword) => password::verify(&password, &hashword),
            None => password::verify_dummy(&password),
        })
        .await
        .map_err(|_| AuthError::PasswordHash)?;

        let record = match record {
            Some(record) if matches => record,
            _ => {
                warn!("Failed admin login for '{}'", credentials.email);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let identity = Identity::admin(record.email);
        let token = self.signer.issue(&identity)?;

        info!("Admin '{}' logged in", identity.email);
        Ok(IssuedSession { token, identity })
    }

    /// Re-issue a token with a fresh expiry for an admin that still exists
    pub async fn refresh(&self, identity: &Identity) -> Result<IssuedSession, AuthError> {
        let record = self
            .store
            .find_by_email(&identity.email)
            .await?
            .ok_or_else(|| {
                warn!("Session refresh for removed admin '{}'", identity.email);
                AuthError::InvalidCredentials
            })?;

        let identity = Identity::admin(record.email);
        let token = self.signer.issue(&identity)?;

        Ok(IssuedSession { token, identity })
    }
}
