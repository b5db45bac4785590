//! `reqwest` implementation of the upstream client

use super::types::{ChatCompletionRequest, RealtimeSessionRequest};
use super::{UpstreamClient, UpstreamError};
use crate::config::UpstreamConfig;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// OpenAI HTTP client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_base: String,
}

impl OpenAiClient {
    /// Build a client with the configured base URL and timeout
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        api_key: &str,
        body: &B,
        beta: Option<&str>,
    ) -> std::result::Result<Value, UpstreamError> {
        let url = format!("{}{}", self.api_base, path);
        debug!("POST {}", url);

        let mut request = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(body);
        if let Some(beta) = beta {
            request = request.header("OpenAI-Beta", beta);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| UpstreamError::Transport(e.to_string()))?;
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Transport(format!("Invalid upstream response: {}", e)))
    }
}

#[async_trait]
impl UpstreamClient for OpenAiClient {
    async fn chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> std::result::Result<Value, UpstreamError> {
        self.post_json("/chat/completions", api_key, request, None)
            .await
    }

    async fn create_realtime_session(
        &self,
        api_key: &str,
        request: &RealtimeSessionRequest,
    ) -> std::result::Result<Value, UpstreamError> {
        self.post_json("/realtime/sessions", api_key, request, Some("realtime=v1"))
            .await
    }
}
