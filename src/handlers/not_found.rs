use crate::types::error::AppError;
use axum::response::{IntoResponse, Response};

/// Fallback handler for 404 Not Found
pub async fn not_found() -> Response {
    AppError::NotFound("Not found".to_string()).into_response()
}
