//! Configuration management for the Gateway
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then environment variables (a `.env` file is honoured).

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default location of the YAML configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| read_error(path, e))?;

        let config = Self {
            gateway: parse_gateway(&content)?,
        };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load the YAML file, then apply environment overrides and validate.
    ///
    /// With no explicit path, [`DEFAULT_CONFIG_PATH`] is tried and defaults are
    /// used if it does not exist. Any other read, parse or validation failure
    /// is returned.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        match path {
            Some(path) => Self::load_from(path, true).await,
            None => Self::load_from(Path::new(DEFAULT_CONFIG_PATH), false).await,
        }
    }

    /// Load from `path`; a missing file is only an error when `required`
    pub(crate) async fn load_from(path: &Path, required: bool) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let base = match tokio::fs::read_to_string(path).await {
            Ok(content) => parse_gateway(&content)?,
            Err(e) if !required && e.kind() == io::ErrorKind::NotFound => {
                warn!("No configuration file at {:?}, using defaults", path);
                GatewayConfig::default()
            }
            Err(e) => return Err(read_error(path, e)),
        };

        let config = Self {
            gateway: base.apply_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    /// Get upstream configuration
    pub fn upstream(&self) -> &UpstreamConfig {
        &self.gateway.upstream
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.gateway
            .rate_limit
            .validate()
            .map_err(|e| GatewayError::Config(format!("Rate limit config error: {}", e)))?;

        self.gateway
            .upstream
            .validate()
            .map_err(|e| GatewayError::Config(format!("Upstream config error: {}", e)))?;

        if self.gateway.upstream.credential().is_none() {
            warn!("OPENAI_API_KEY is not set; chat and realtime endpoints will fail");
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_gateway(content: &str) -> Result<GatewayConfig> {
    serde_yaml::from_str(content)
        .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))
}

fn read_error(path: &Path, e: io::Error) -> GatewayError {
    GatewayError::Config(format!("Failed to read config file {:?}: {}", path, e))
}
