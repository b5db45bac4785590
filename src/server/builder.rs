//! Server builder and run_server function

use crate::config::Config;
use crate::core::upstream::UpstreamClient;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    client: Option<Arc<dyn UpstreamClient>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a specific upstream client instead of the OpenAI one
    pub fn with_client(mut self, client: Arc<dyn UpstreamClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        match self.client {
            Some(client) => Ok(HttpServer::with_client(&config, client)),
            None => HttpServer::new(&config),
        }
    }
}

/// Load configuration and serve until shutdown.
///
/// `host` and `port` override whatever the file and environment set.
pub async fn run_server(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    info!("Starting Vissai Gateway v{}", crate::VERSION);

    let mut config = Config::load(config_path).await?;
    if let Some(host) = host {
        config.gateway.server.host = host;
    }
    if let Some(port) = port {
        config.gateway.server.port = port;
    }
    config.validate()?;

    let server = ServerBuilder::new().with_config(config.clone()).build()?;
    info!("Server starting at: http://{}", config.server().address());
    info!("API Endpoints:");
    info!("   POST /api/run - Draft responder");
    info!("   GET  /api/healthz - Health counters");
    info!("   POST /api/chat - Chat proxy");
    info!("   POST /api/realtime/ephemeral - Realtime session");

    server.start().await
}
