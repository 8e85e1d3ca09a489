//! API server implementation.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::http::routes::{create_router, RouterOptions};
use crate::state::AppState;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
}

impl ServerOptions {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self::new("127.0.0.1", 8000)
    }
}

/// The API server.
pub struct ApiServer {
    options: ServerOptions,
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(options: ServerOptions, state: Arc<AppState>) -> Self {
        Self { options, state }
    }

    /// Get the server address. IPv6 hosts are bracketed.
    pub fn addr(&self) -> String {
        if self.options.host.contains(':') {
            format!("[{}]:{}", self.options.host, self.options.port)
        } else {
            format!("{}:{}", self.options.host, self.options.port)
        }
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Start the server and run until Ctrl-C.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut router_options = RouterOptions::default();
        if let Some(ref dir) = self.options.static_dir {
            if dir.is_dir() {
                router_options = router_options.with_static_dir(dir.clone());
            } else {
                warn!("Static directory {:?} not found, front-end disabled", dir);
            }
        }
        let app = create_router(self.state.clone(), router_options);

        // Hostnames are resolved here; the first address that binds wins.
        let listener = TcpListener::bind((self.options.host.as_str(), self.options.port)).await?;

        info!(
            "API server listening on {} ({} activities)",
            listener.local_addr()?,
            self.state.registry.len()
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("API server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
