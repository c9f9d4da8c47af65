use crate::{app_state::AppState, types::error::AppError};
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Bearer token middleware for protected resources
///
/// Expects `Authorization: Bearer <token>`, verifies it against the service
/// secret and injects the decoded `Claims` into request extensions. Rejects
/// with 401 before the downstream handler does any work.
///
/// Note: app_state must be captured in a closure when creating the middleware layer
pub async fn require_token(app_state: AppState, mut request: Request, next: Next) -> Response {
    let auth_header = match request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
    {
        Some(h) => h,
        None => return AppError::Unauthenticated("No token".to_string()).into_response(),
    };

    let token = bearer_token(auth_header).unwrap_or_default();

    let claims = match app_state.auth.verify_token(token) {
        Ok(claims) => claims,
        Err(_) => return AppError::Unauthenticated("Invalid token".to_string()).into_response(),
    };

    tracing::debug!("Authorized request for {}", claims.username);
    request.extensions_mut().insert(claims);

    next.run(request).await
}

fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
}
