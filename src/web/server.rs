//! Web server for the soundboard.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::{Result, SoundboardError};

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// Web server for the soundboard.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server from configuration.
    ///
    /// The storage directory is created if it doesn't exist.
    pub fn new(config: &Config) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| SoundboardError::Config(format!("invalid server address: {e}")))?;

        let app_state = AppState::from_config(&config.sounds)?;
        tracing::info!(
            "Sound storage initialized at: {}",
            app_state.storage_dir().display()
        );

        Ok(Self::with_state(addr, app_state))
    }

    /// Create a web server from prepared state.
    pub fn with_state(addr: SocketAddr, app_state: AppState) -> Self {
        Self {
            addr,
            app_state: Arc::new(app_state),
        }
    }

    /// Get the configured server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_router(&self) -> Router {
        create_router(self.app_state.clone())
            .merge(create_health_router())
            .layer(CompressionLayer::new())
    }

    /// Run the web server.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Server running at http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::result::Result<SocketAddr, std::io::Error> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Server running at http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config(temp_dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0; // Use random port
        config.sounds.public_dir = temp_dir.path().display().to_string();
        config.sounds.storage_dir = temp_dir.path().join("sounds").display().to_string();
        config
    }

    #[tokio::test]
    async fn test_web_server_new() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(&temp_dir);

        let server = WebServer::new(&config).unwrap();
        assert_eq!(server.addr().ip().to_string(), "127.0.0.1");
        assert!(temp_dir.path().join("sounds").is_dir());
    }

    #[tokio::test]
    async fn test_web_server_invalid_host() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = create_test_config(&temp_dir);
        config.server.host = "not a host".to_string();

        assert!(matches!(
            WebServer::new(&config),
            Err(SoundboardError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_web_server_run() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(&temp_dir);

        let server = WebServer::new(&config).unwrap();
        let addr = server.run_with_addr().await.unwrap();

        // Test health endpoint
        let client = reqwest::Client::new();
        let resp = client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .unwrap();

        assert!(resp.status().is_success());
        assert_eq!(resp.text().await.unwrap(), "OK");
    }
}
