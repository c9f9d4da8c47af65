use crate::types::error::AppError;

/// bcrypt work factor used for every stored credential
pub const DEFAULT_HASH_COST: u32 = 12;

/// Hash a password with bcrypt on the blocking pool
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored bcrypt hash
///
/// The comparison itself is constant-time inside bcrypt. A hash that cannot
/// be parsed is an internal error, not a mismatch.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}
