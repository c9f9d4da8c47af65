use super::credentials_body;
use crate::{
    app_state::AppState,
    types::{CredentialsRequest, LoginResponse, error::AppError},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// POST /api/login - Exchange credentials for a token
pub async fn login(
    State(app_state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let (username, password) = credentials_body(payload)?;
    tracing::info!("LOGIN: username={}", username);

    let token = app_state.auth.login(&username, &password).await.map_err(|e| {
        tracing::warn!("Login failed: username={}, reason={}", username, e);
        e
    })?;

    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}
