use filedrop::{AppState, AuthService, Config, CredentialStore, JsonFileStore, create_app};

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// Server configuration
const HOST: &str = "0.0.0.0";
const PORT: u16 = 3000;

// Default on-disk layout, relative to the working directory
const DEFAULT_USERS_FILE: &str = "users.json";
const DEFAULT_MANIFEST_FILE: &str = "manifest.json";
const DEFAULT_FILES_DIR: &str = "files";

/// filedrop: account signup/login with token-gated file distribution
#[derive(Parser, Debug)]
#[command(name = "filedrop")]
#[command(about = "Account service issuing signed tokens for a manifest of downloadable files", long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = PORT)]
    port: u16,

    /// Secret used to sign and verify tokens (required)
    #[arg(long, env = "SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Credential store document
    #[arg(long, env = "USERS_FILE", default_value = DEFAULT_USERS_FILE)]
    users_file: PathBuf,

    /// Manifest document served at /api/manifest
    #[arg(long, env = "MANIFEST_FILE", default_value = DEFAULT_MANIFEST_FILE)]
    manifest_file: PathBuf,

    /// Directory served under /files
    #[arg(long, env = "FILES_DIR", default_value = DEFAULT_FILES_DIR)]
    files_dir: PathBuf,

    /// Require a bearer token for the manifest and file routes
    #[arg(long, env = "PROTECT_DOWNLOADS")]
    protect_downloads: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            host: cli.host,
            port: cli.port,
            secret: cli.secret.unwrap_or_default(),
            users_file: cli.users_file,
            manifest_file: cli.manifest_file,
            files_dir: cli.files_dir,
            protect_downloads: cli.protect_downloads,
        }
    }
}

#[tokio::main]
async fn main() {
    // Pick up a local .env before clap reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("filedrop=info,tower_http=info")),
        )
        .init();

    // Parse command line arguments
    let config: Config = Cli::parse().into();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // Load the credential store; a corrupt store must stop startup
    let store = match JsonFileStore::open(&config.users_file).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                "Failed to load credential store '{}': {}",
                config.users_file.display(),
                e
            );
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded {} account(s) from {}",
        store.len().await,
        config.users_file.display()
    );

    let store: Arc<dyn CredentialStore> = Arc::new(store);
    let auth = AuthService::new(store, &config.secret);

    if config.protect_downloads {
        tracing::info!("Manifest and file routes require a bearer token");
    } else {
        tracing::info!("Manifest and file routes are open to any caller");
    }

    // Create shared app state
    let app_state = AppState::new(
        auth,
        config.manifest_file.clone(),
        config.files_dir.clone(),
        config.protect_downloads,
    );
    let app = create_app(app_state);

    // Start server
    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server running on {}", addr);
    tracing::info!(
        "Serving manifest {} and files from {}",
        config.manifest_file.display(),
        config.files_dir.display()
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
