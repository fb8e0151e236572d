//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `vibecheck-server`
//! integration tests.
//!
//! - `TestApp`: spawns the real router on a random port, with the Perspective API
//!   replaced by an `httpmock::MockServer`.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use reqwest::Client;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};
use vibecheck_server::{config::AppConfig, router::create_router, state::build_app_state};
use vibecheck_test_utils::setup_tracing;

/// The path the mock Perspective API answers on.
pub const ANALYZE_PATH: &str = "/v1alpha1/comments:analyze";
pub const TEST_API_KEY: &str = "test-api-key";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_timeout(5).await
    }

    /// Spawns the server with a custom upstream timeout in seconds.
    pub async fn spawn_with_timeout(upstream_timeout_secs: u64) -> Result<Self> {
        Self::spawn_with(|config| config.upstream_timeout_secs = upstream_timeout_secs).await
    }

    /// Spawns the server after letting `customize` adjust the configuration.
    ///
    /// The configuration starts out pointed at the mock Perspective server.
    pub async fn spawn_with(customize: impl FnOnce(&mut AppConfig)) -> Result<Self> {
        setup_tracing();

        let mock_server = MockServer::start_async().await;
        let mut config = AppConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            perspective_api_key: TEST_API_KEY.to_string(),
            perspective_api_url: mock_server.url(ANALYZE_PATH),
            upstream_timeout_secs: 5,
        };
        customize(&mut config);
        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Registers a catch-all upstream mock so tests can assert it was never hit.
    pub async fn mock_any_upstream(&self) -> httpmock::Mock<'_> {
        self.mock_server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200);
            })
            .await
    }

    /// Posts `body` to `/moderate`.
    pub async fn moderate(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/moderate", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request to /moderate")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver might already be gone if the server task panicked,
            // so we ignore the result of send.
            let _ = tx.send(());
        }
    }
}
