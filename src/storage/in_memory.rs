use super::backend::CredentialStore;
use crate::types::{CredentialRecord, error::AppError};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory credential store for testing/development
#[derive(Clone)]
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<String, CredentialRecord>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl CredentialStore for InMemoryStore {
    async fn load(&self) -> Result<usize, AppError> {
        // Nothing backs this store
        Ok(self.records.read().await.len())
    }

    async fn get(&self, username: &str) -> Result<Option<CredentialRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records.get(username).cloned())
    }

    async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<CredentialRecord, AppError> {
        let mut records = self.records.write().await;

        match records.entry(username.to_string()) {
            Entry::Occupied(_) => Err(AppError::AlreadyExists),
            Entry::Vacant(slot) => {
                let record = CredentialRecord {
                    username: username.to_string(),
                    password_hash: password_hash.to_string(),
                    created_at: chrono::Utc::now(),
                };
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn persist(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
