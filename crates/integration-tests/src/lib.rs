//! Integration tests for Retail Ops.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p retail-ops-integration-tests
//! ```
//!
//! Each test starts the full console router (middleware included) on an
//! ephemeral local port and talks to it with `reqwest`, so no external
//! server or database is needed.
//!
//! # Test Categories
//!
//! - `console_pages` - page rendering, search, filters, not-found
//! - `console_actions` - toast actions and the ticket dialog
//! - `console_api` - JSON listing endpoints and response headers
//! - `workspace_manifests` - inherited dependencies resolve in the workspace

use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::Client;
use tokio::net::TcpListener;

use retail_ops_admin::catalog::Catalog;
use retail_ops_admin::config::AdminConfig;
use retail_ops_admin::state::AppState;

/// A console server bound to `127.0.0.1:0` for the lifetime of a test.
pub struct TestServer {
    addr: SocketAddr,
    client: Client,
}

impl TestServer {
    /// Start the console with seeded records and default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the catalog fails to load.
    #[allow(clippy::expect_used)]
    pub async fn start() -> Self {
        let config = AdminConfig {
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../admin/static")),
            ..AdminConfig::default()
        };
        let catalog = Catalog::seeded().expect("Failed to seed catalog");
        let app = retail_ops_admin::app(AppState::new(config, catalog));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self { addr, client }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// HTTP client for this server.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// GET `path`.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client.get(self.url(path)).send().await
    }

    /// POST `path` with an empty body, the way an htmx button does.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn post(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(self.url(path))
            .header("HX-Request", "true")
            .send()
            .await
    }
}
