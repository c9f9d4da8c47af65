use super::credentials_body;
use crate::{
    app_state::AppState,
    types::{CredentialsRequest, SignupResponse, error::AppError},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// POST /api/signup - Create an account
pub async fn signup(
    State(app_state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<SignupResponse>, AppError> {
    let (username, password) = credentials_body(payload)?;
    tracing::info!("SIGNUP: username={}", username);

    match app_state.auth.signup(&username, &password).await {
        Ok(record) => {
            tracing::info!("Account created: username={}", record.username);
            Ok(Json(SignupResponse {
                success: true,
                msg: "Account created".to_string(),
            }))
        }
        Err(e) => {
            tracing::warn!("Signup failed: username={}, reason={}", username, e);
            Err(e)
        }
    }
}
