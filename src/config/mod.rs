use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::env;

/// Default session lifetime: 7 days
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 24 * 7;

/// Longest session lifetime accepted from configuration: 1 year
pub const MAX_SESSION_TTL_HOURS: u64 = 24 * 365;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// HMAC secret for session tokens. Login fails with a configuration error while unset.
    #[serde(skip_serializing)]
    pub jwt_secret: Option<String>,
    pub session_ttl_hours: u64,
    pub secure_cookies: bool,
    pub cors_origins: Vec<String>,
}

impl SecurityConfig {
    /// Session lifetime, clamped to `1..=MAX_SESSION_TTL_HOURS` hours
    pub fn session_ttl(&self) -> Duration {
        let hours = self.session_ttl_hours.clamp(1, MAX_SESSION_TTL_HOURS);
        i64::try_from(hours)
            .ok()
            .and_then(Duration::try_hours)
            .unwrap_or_else(|| Duration::days(7))
    }
}

/// Parse a session TTL override, rejecting zero and anything past the cap
fn parse_session_ttl_hours(raw: &str) -> Option<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|hours| (1..=MAX_SESSION_TTL_HOURS).contains(hours))
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        Self::for_environment(environment).with_env_overrides()
    }

    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("API_HOST") {
            self.server.host = v;
        }
        if let Some(port) = env::var("API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = Some(v).filter(|url| !url.trim().is_empty());
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }

        // Security overrides
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = Some(v).filter(|secret| !secret.is_empty());
        }
        if let Ok(v) = env::var("SECURITY_SESSION_TTL_HOURS") {
            match parse_session_ttl_hours(&v) {
                Some(hours) => self.security.session_ttl_hours = hours,
                None => tracing::warn!(
                    "Ignoring SECURITY_SESSION_TTL_HOURS={:?}: expected 1..={} hours, keeping {}",
                    v,
                    MAX_SESSION_TTL_HOURS,
                    self.security.session_ttl_hours
                ),
            }
        }
        if let Ok(v) = env::var("SECURITY_SECURE_COOKIES") {
            self.security.secure_cookies = v.parse().unwrap_or(self.security.secure_cookies);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3001,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 5,
                connection_timeout: 30,
            },
            security: SecurityConfig {
                jwt_secret: None,
                session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
                secure_cookies: false,
                cors_origins: vec!["http://localhost:3000".to_string()],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3001,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
                connection_timeout: 10,
            },
            security: SecurityConfig {
                jwt_secret: None,
                session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
                secure_cookies: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3001,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 20,
                connection_timeout: 5,
            },
            security: SecurityConfig {
                jwt_secret: None,
                session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
                secure_cookies: true,
                cors_origins: vec!["https://www.example.com".to_string()],
            },
        }
    }
}
