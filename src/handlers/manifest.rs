use crate::{app_state::AppState, types::error::AppError};
use axum::{Json, extract::State};
use std::io::ErrorKind;

/// GET /api/manifest - Return the distribution manifest
///
/// The document is re-read on every request so edits on disk show up
/// without a restart.
pub async fn get_manifest(
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let path = &app_state.manifest_file;
    tracing::info!("GET manifest: path={}", path.display());

    let content = match tokio::fs::read(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::NotFound("Manifest not found".to_string()));
        }
        Err(e) => {
            return Err(AppError::Internal(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )));
        }
    };

    let manifest: serde_json::Value = serde_json::from_slice(&content).map_err(|e| {
        AppError::Internal(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    Ok(Json(manifest))
}
