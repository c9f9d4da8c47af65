use crate::{app_state::AppState, auth, handlers};
use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Create the application router with all routes and middleware
///
/// This function is used by both main.rs and integration tests to ensure
/// the same server configuration is used in both production and tests.
pub fn create_app(app_state: AppState) -> Router {
    use handlers::{get_manifest, login, not_found, signup};

    // Manifest and file downloads: open unless protect_downloads is set
    let mut downloads = Router::new()
        .route("/api/manifest", get(get_manifest))
        .nest_service("/files", ServeDir::new(&app_state.files_dir));

    if app_state.protect_downloads {
        let gate_state = app_state.clone();
        downloads = downloads.layer(middleware::from_fn(move |request: Request, next: Next| {
            let state = gate_state.clone();
            async move { auth::require_token(state, request, next).await }
        }));
    }

    Router::new()
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        .merge(downloads)
        // Fallback for 404 Not Found
        .fallback(not_found)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
