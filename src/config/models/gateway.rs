//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Upstream API configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl GatewayConfig {
    /// Apply environment overrides on top of the current values
    pub fn apply_env(mut self) -> Result<Self> {
        self.apply_vars(|key| env::var(key).ok())?;
        Ok(self)
    }

    /// Apply overrides from an arbitrary variable source
    pub(crate) fn apply_vars<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("GATEWAY_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(api_key) = var("OPENAI_API_KEY") {
            self.upstream.api_key = Some(api_key);
        }
        if let Some(api_base) = var("OPENAI_API_BASE") {
            self.upstream.api_base = api_base;
        }
        if let Some(model) = var("OPENAI_REALTIME_MODEL") {
            self.upstream.realtime_model = model;
        }
        if let Some(max) = var("RATE_LIMIT_MAX") {
            self.rate_limit.max_requests = max
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid RATE_LIMIT_MAX: {}", e)))?;
        }
        if let Some(window) = var("RATE_LIMIT_WINDOW_MS") {
            self.rate_limit.window_ms = window.parse().map_err(|e| {
                GatewayError::Config(format!("Invalid RATE_LIMIT_WINDOW_MS: {}", e))
            })?;
        }
        debug!("Environment overrides applied");
        Ok(())
    }
}
