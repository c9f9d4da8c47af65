use crate::types::{CredentialRecord, error::AppError};

/// Credential store trait - implement this for different storage backends
///
/// Usernames are unique and case-sensitive. Records are never mutated after
/// `create`, and every successful `create` is persisted before it returns.
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Re-read the backing store into memory, returning the record count.
    /// A missing backing store is an empty store; an unreadable one is
    /// `StorageCorrupt`.
    async fn load(&self) -> Result<usize, AppError>;
    async fn get(&self, username: &str) -> Result<Option<CredentialRecord>, AppError>;
    async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<CredentialRecord, AppError>;
    /// Write the full mapping to the backing store.
    async fn persist(&self) -> Result<(), AppError>;
    async fn len(&self) -> usize;
}
