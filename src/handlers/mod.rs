mod login;
mod manifest;
mod not_found;
mod signup;

pub use login::login;
pub use manifest::get_manifest;
pub use not_found::not_found;
pub use signup::signup;

use crate::types::{CredentialsRequest, error::AppError};
use axum::{Json, extract::rejection::JsonRejection};

/// Unwrap a JSON credentials body, mapping any rejection to `InvalidInput`
fn credentials_body(
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(String, String), AppError> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        AppError::InvalidInput("Missing fields".to_string())
    })?;
    Ok((
        body.username.unwrap_or_default(),
        body.password.unwrap_or_default(),
    ))
}
