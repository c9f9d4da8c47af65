use crate::auth::AuthService;
use std::path::PathBuf;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub manifest_file: PathBuf,
    pub files_dir: PathBuf,
    /// Gate the manifest and file routes behind a bearer token
    pub protect_downloads: bool,
}

impl AppState {
    pub fn new(
        auth: AuthService,
        manifest_file: PathBuf,
        files_dir: PathBuf,
        protect_downloads: bool,
    ) -> Self {
        Self {
            auth,
            manifest_file,
            files_dir,
            protect_downloads,
        }
    }
}
