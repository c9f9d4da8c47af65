use super::password::{DEFAULT_HASH_COST, hash_password, verify_password};
use super::token::TokenKeys;
use crate::storage::CredentialStore;
use crate::types::{Claims, CredentialRecord, error::AppError};
use std::sync::Arc;

/// Account onboarding, credential verification and token issuance
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    keys: TokenKeys,
    hash_cost: u32,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, secret: &str) -> Self {
        Self {
            store,
            keys: TokenKeys::new(secret),
            hash_cost: DEFAULT_HASH_COST,
        }
    }

    /// Override the bcrypt cost. Only meant for tests.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Register a new account
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
    ) -> Result<CredentialRecord, AppError> {
        require_fields(username, password)?;

        // Skip the expensive hash for a name that is already taken;
        // `create` still enforces uniqueness on its own.
        if self.store.get(username).await?.is_some() {
            return Err(AppError::AlreadyExists);
        }

        let hash = hash_password(password.to_string(), self.hash_cost).await?;
        self.store.create(username, &hash).await
    }

    /// Verify credentials and mint a token
    ///
    /// Unknown users and wrong passwords are indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        require_fields(username, password)?;

        let Some(record) = self.store.get(username).await? else {
            tracing::debug!("Login for unknown user");
            return Err(AppError::InvalidCredentials);
        };

        if !verify_password(password.to_string(), record.password_hash).await? {
            return Err(AppError::InvalidCredentials);
        }

        self.keys.issue(username)
    }

    /// Validate a token without touching the store
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        if token.is_empty() {
            return Err(AppError::Unauthenticated("No token".to_string()));
        }
        self.keys.verify(token)
    }
}

fn require_fields(username: &str, password: &str) -> Result<(), AppError> {
    if username.is_empty() || password.is_empty() {
        return Err(AppError::InvalidInput("Missing fields".to_string()));
    }
    Ok(())
}
