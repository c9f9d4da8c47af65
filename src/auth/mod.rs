mod middleware;
mod password;
mod service;
mod token;

pub use middleware::require_token;
pub use password::{DEFAULT_HASH_COST, hash_password, verify_password};
pub use service::AuthService;
pub use token::{TOKEN_TTL_DAYS, TokenKeys};
