use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the admin store and its connection pool
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    /// True when the database could not be reached at all (as opposed to a failed query)
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            DatabaseError::Sqlx(sqlx::Error::PoolTimedOut)
                | DatabaseError::Sqlx(sqlx::Error::PoolClosed)
                | DatabaseError::Sqlx(sqlx::Error::Io(_))
        )
    }
}

/// Connection pool setup for the content database
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open a pool against `DATABASE_URL`
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let url = config
            .url
            .as_deref()
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(url)
            .await?;

        info!("Created database pool (max_connections={})", config.max_connections);
        Ok(pool)
    }

    /// Create the admins table if this is a fresh database
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS admins (
                id UUID PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}
