//! Session cookie pair.
//!
//! `token` carries the signed JWT and is the only cookie the server trusts.
//! `session` is a readable copy of the identity for the admin UI.

use axum::http::{header, HeaderMap};

use super::{AuthError, Identity};
use crate::config::SecurityConfig;

pub const TOKEN_COOKIE: &str = "token";
pub const SESSION_COOKIE: &str = "session";

/// Attributes shared by every cookie this service sets
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    pub secure: bool,
    pub max_age_secs: i64,
}

impl CookiePolicy {
    pub fn from_config(security: &SecurityConfig) -> Self {
        Self {
            secure: security.secure_cookies,
            max_age_secs: security.session_ttl().num_seconds(),
        }
    }

    /// `Set-Cookie` values for a freshly issued session
    pub fn session_cookies(&self, token: &str, identity: &Identity) -> Result<[String; 2], AuthError> {
        let readable = urlencoding::encode(&serde_json::to_string(identity)?).into_owned();

        Ok([
            self.render(TOKEN_COOKIE, token, self.max_age_secs, true),
            self.render(SESSION_COOKIE, &readable, self.max_age_secs, false),
        ])
    }

    /// `Set-Cookie` values that expire both cookies
    pub fn cleared_cookies(&self) -> [String; 2] {
        [
            self.render(TOKEN_COOKIE, "", 0, true),
            self.render(SESSION_COOKIE, "", 0, false),
        ]
    }

    fn render(&self, name: &str, value: &str, max_age: i64, http_only: bool) -> String {
        let mut cookie = format!("{}={}; Path=/; Max-Age={}; SameSite=Lax", name, value, max_age);
        if http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Find a cookie by name across all `Cookie` headers
pub fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}
