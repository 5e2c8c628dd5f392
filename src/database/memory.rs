use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::manager::DatabaseError;
use super::models::AdminRecord;
use super::repository::AdminStore;

/// In-process admin store keyed by email. Used by tests and local tooling.
#[derive(Default)]
pub struct MemoryAdminStore {
    admins: RwLock<HashMap<String, AdminRecord>>,
}

impl MemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, DatabaseError> {
        let admins = self.admins.read().await;
        Ok(admins.get(email).cloned())
    }

    async fn insert(&self, record: AdminRecord) -> Result<AdminRecord, DatabaseError> {
        let mut admins = self.admins.write().await;
        if admins.contains_key(&record.email) {
            return Err(DatabaseError::Conflict(format!(
                "admin '{}' already exists",
                record.email
            )));
        }
        admins.insert(record.email.clone(), record.clone());
        Ok(record)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find() {
        let store = MemoryAdminStore::new();
        store
            .insert(AdminRecord::new("booker@agency.test", "$argon2id$stub"))
            .await
            .unwrap();

        let found = store.find_by_email("booker@agency.test").await.unwrap();
        assert_eq!(found.map(|r| r.email).as_deref(), Some("booker@agency.test"));
        assert!(store.find_by_email("nobody@agency.test").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = MemoryAdminStore::new();
        store
            .insert(AdminRecord::new("booker@agency.test", "a"))
            .await
            .unwrap();

        let err = store
            .insert(AdminRecord::new("booker@agency.test", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Conflict(_)));
    }
}
