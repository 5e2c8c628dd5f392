//! Shared application state.

use std::sync::Arc;

use crate::auth::{CookiePolicy, SessionIssuer, TokenSigner};
use crate::config::AppConfig;
use crate::database::AdminStore;

/// Immutable per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub signer: Arc<TokenSigner>,
    pub store: Arc<dyn AdminStore>,
    pub cookies: CookiePolicy,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn AdminStore>) -> Self {
        let signer = Arc::new(TokenSigner::from_config(&config.security));
        let cookies = CookiePolicy::from_config(&config.security);

        Self {
            config: Arc::new(config),
            signer,
            store,
            cookies,
        }
    }

    pub fn issuer(&self) -> SessionIssuer {
        SessionIssuer::new(Arc::clone(&self.store), Arc::clone(&self.signer))
    }
}
