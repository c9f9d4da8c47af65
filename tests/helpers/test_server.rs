use super::{TEST_HASH_COST, TEST_SECRET};
use filedrop::{AppState, AuthService, CredentialStore, JsonFileStore, create_app};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// Test server handle that automatically shuts down on drop
///
/// This starts a real HTTP server on a random port for integration testing.
/// The server uses the actual production code via create_app(), backed by a
/// credential store, manifest and files directory inside a temp directory.
pub struct TestServer {
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    #[allow(dead_code)] // Keep handle alive to prevent task abort
    handle: JoinHandle<()>,
    #[allow(dead_code)] // Removed on drop
    dir: TempDir,
    pub client: reqwest::Client,
    pub base_url: String,
    pub auth: AuthService,
}

#[allow(dead_code)]
impl TestServer {
    /// Start a server with open manifest and file routes
    pub async fn start() -> Self {
        Self::start_with(false).await
    }

    /// Start a server whose manifest and file routes require a token
    pub async fn start_protected() -> Self {
        Self::start_with(true).await
    }

    async fn start_with(protect_downloads: bool) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("files")).unwrap();

        let store: Arc<dyn CredentialStore> =
            Arc::new(JsonFileStore::open(dir.path().join("users.json")).await.unwrap());
        let auth = AuthService::new(store, TEST_SECRET).with_hash_cost(TEST_HASH_COST);

        let app_state = AppState::new(
            auth.clone(),
            dir.path().join("manifest.json"),
            dir.path().join("files"),
            protect_downloads,
        );

        // Use the ACTUAL production create_app function
        let app = create_app(app_state);

        // Bind to a random available port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        TestServer {
            shutdown_tx: Some(shutdown_tx),
            handle,
            dir,
            client: reqwest::Client::new(),
            base_url: format!("http://{}", addr),
            auth,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn users_file(&self) -> PathBuf {
        self.dir.path().join("users.json")
    }

    pub fn write_manifest(&self, content: &str) {
        std::fs::write(self.dir.path().join("manifest.json"), content).unwrap();
    }

    pub fn write_file(&self, relative: &str, content: &[u8]) {
        let path = self.dir.path().join("files").join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// POST a JSON body and return status plus parsed JSON response
    pub async fn post_json(&self, path: &str, body: Value) -> (u16, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    pub async fn signup(&self, username: &str, password: &str) -> (u16, Value) {
        self.post_json(
            "/api/signup",
            serde_json::json!({ "username": username, "password": password }),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (u16, Value) {
        self.post_json(
            "/api/login",
            serde_json::json!({ "username": username, "password": password }),
        )
        .await
    }

    /// Sign up and log in, returning the issued token
    pub async fn token_for(&self, username: &str, password: &str) -> String {
        let (status, _) = self.signup(username, password).await;
        assert_eq!(status, 200);
        let (status, body) = self.login(username, password).await;
        assert_eq!(status, 200);
        body["token"].as_str().unwrap().to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Signal shutdown (ignore errors if already shut down)
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
