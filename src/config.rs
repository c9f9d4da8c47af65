use std::fmt;
use std::path::PathBuf;

/// Secrets shorter than this are accepted but logged as weak
pub const MIN_RECOMMENDED_SECRET_LEN: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no signing secret configured; set SECRET or pass --secret")]
    MissingSecret,
    #[error("port must be non-zero")]
    InvalidPort,
}

/// Runtime configuration, resolved from CLI flags and the environment
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub secret: String,
    pub users_file: PathBuf,
    pub manifest_file: PathBuf,
    pub files_dir: PathBuf,
    pub protect_downloads: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.secret.len() < MIN_RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                "Signing secret is shorter than {} bytes; tokens are easier to forge",
                MIN_RECOMMENDED_SECRET_LEN
            );
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Keep the secret out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secret", &"<redacted>")
            .field("users_file", &self.users_file)
            .field("manifest_file", &self.manifest_file)
            .field("files_dir", &self.files_dir)
            .field("protect_downloads", &self.protect_downloads)
            .finish()
    }
}
