use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error responses for the account and distribution API
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("user already exists")]
    AlreadyExists,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("credential store corrupt: {0}")]
    StorageCorrupt(String),
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error body. Auth-layer errors carry `success: false`, gate and
/// lookup errors only carry `msg`.
#[derive(Serialize)]
struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    msg: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::AlreadyExists => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageCorrupt(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::AlreadyExists => "User exists".to_string(),
            AppError::InvalidCredentials => "Invalid username or password".to_string(),
            AppError::Unauthenticated(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::StorageCorrupt(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }

    fn has_success_flag(&self) -> bool {
        !matches!(self, AppError::Unauthenticated(_) | AppError::NotFound(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::StorageCorrupt(detail) | AppError::Internal(detail) = &self {
            tracing::error!("Request failed: {}", detail);
        }

        let body = ErrorResponse {
            success: self.has_success_flag().then_some(false),
            msg: self.message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
