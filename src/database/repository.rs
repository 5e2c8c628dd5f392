use async_trait::async_trait;
use sqlx::PgPool;

use super::manager::{DatabaseError, DatabaseManager};
use super::models::AdminRecord;

/// Data access for admin accounts.
///
/// Emails are compared exactly; callers normalize them first
/// (see [`crate::auth::normalize_email`]).
#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, DatabaseError>;

    async fn insert(&self, record: AdminRecord) -> Result<AdminRecord, DatabaseError>;

    /// Cheap connectivity probe for `/health`
    async fn ping(&self) -> Result<(), DatabaseError>;
}

/// Postgres-backed admin store
#[derive(Clone)]
pub struct PgAdminStore {
    pool: PgPool,
}

impl PgAdminStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminStore for PgAdminStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, DatabaseError> {
        let record = sqlx::query_as::<_, AdminRecord>(
            "SELECT id, email, password_hash, created_at FROM admins WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn insert(&self, record: AdminRecord) -> Result<AdminRecord, DatabaseError> {
        let inserted = sqlx::query_as::<_, AdminRecord>(
            r#"
            INSERT INTO admins (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(record.id)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                DatabaseError::Conflict(format!("admin '{}' already exists", record.email))
            }
            other => DatabaseError::Sqlx(other),
        })?;

        Ok(inserted)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
