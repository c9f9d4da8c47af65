// Library exports for integration tests
pub mod app_state;
pub mod auth;
pub mod config;
pub mod handlers;
pub mod server;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use app_state::AppState;
pub use auth::AuthService;
pub use config::{Config, ConfigError};
pub use storage::{CredentialStore, InMemoryStore, JsonFileStore};
pub use types::{Claims, CredentialRecord, error::AppError};

// Re-export server creation function
pub use server::create_app;
