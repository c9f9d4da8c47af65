mod backend;
mod in_memory;
mod json_file;

pub use backend::CredentialStore;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
