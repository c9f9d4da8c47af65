use super::backend::CredentialStore;
use crate::types::{CredentialRecord, error::AppError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// On-disk shape of one record; the username is the enclosing object key.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCredential {
    #[serde(alias = "password")]
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Credential store backed by a single JSON document.
///
/// The whole document is rewritten on every `create`: it is serialized to a
/// sibling `.tmp` file which is then renamed over the target, so a crash
/// mid-write leaves the previous document intact.
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Arc<RwLock<HashMap<String, CredentialRecord>>>,
}

impl JsonFileStore {
    /// Create a store for `path` without reading it
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store for `path` and load its current contents
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let store = Self::new(path);
        store.load().await?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    async fn write_records(
        &self,
        records: &HashMap<String, CredentialRecord>,
    ) -> Result<(), AppError> {
        let document: BTreeMap<&str, StoredCredential> = records
            .values()
            .map(|record| {
                (
                    record.username.as_str(),
                    StoredCredential {
                        password_hash: record.password_hash.clone(),
                        created_at: record.created_at,
                    },
                )
            })
            .collect();

        let content = serde_json::to_vec_pretty(&document)
            .map_err(|e| AppError::Internal(format!("Failed to serialize credentials: {}", e)))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::Internal(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &content)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(
            "Persisted {} credential(s) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl CredentialStore for JsonFileStore {
    async fn load(&self) -> Result<usize, AppError> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No credential store at {}, starting empty",
                    self.path.display()
                );
                let mut records = self.records.write().await;
                records.clear();
                return Ok(0);
            }
            Err(e) => {
                return Err(AppError::StorageCorrupt(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let document: HashMap<String, StoredCredential> = serde_json::from_slice(&content)
            .map_err(|e| {
                AppError::StorageCorrupt(format!("Failed to parse {}: {}", self.path.display(), e))
            })?;

        let loaded: HashMap<String, CredentialRecord> = document
            .into_iter()
            .map(|(username, stored)| {
                let record = CredentialRecord {
                    username: username.clone(),
                    password_hash: stored.password_hash,
                    created_at: stored.created_at,
                };
                (username, record)
            })
            .collect();

        let count = loaded.len();
        *self.records.write().await = loaded;
        Ok(count)
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
        // The write guard spans check, insert and persist
        let mut records = self.records.write().await;

        if records.contains_key(username) {
            return Err(AppError::AlreadyExists);
        }

        let record = CredentialRecord {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        records.insert(username.to_string(), record.clone());

        if let Err(e) = self.write_records(&records).await {
            records.remove(username);
            return Err(e);
        }

        Ok(record)
    }

    async fn persist(&self) -> Result<(), AppError> {
        let records = self.records.read().await;
        self.write_records(&records).await
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
