pub mod error;
mod models;

pub use models::{
    Claims, CredentialRecord, CredentialsRequest, LoginResponse, SignupResponse,
};
