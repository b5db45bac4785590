//! Ephemeral realtime session minting
//!
//! The browser voice client exchanges the returned `client_secret` for a
//! WebRTC session directly with the upstream; this service only mints it.

use crate::config::UpstreamConfig;
use crate::core::upstream::{RealtimeSessionRequest, UpstreamClient, UpstreamError};
use crate::utils::error::{GatewayError, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Voice requested for every session
const DEFAULT_VOICE: &str = "default";

#[derive(Clone)]
pub struct RealtimeSessions {
    client: Arc<dyn UpstreamClient>,
    upstream: UpstreamConfig,
}

impl RealtimeSessions {
    pub fn new(client: Arc<dyn UpstreamClient>, upstream: UpstreamConfig) -> Self {
        Self { client, upstream }
    }

    /// Mint a session and return the upstream document verbatim
    pub async fn create(&self) -> Result<Value> {
        let api_key = self.upstream.credential().ok_or_else(|| {
            GatewayError::MissingCredential("OpenAI API key not configured".to_string())
        })?;

        let request = RealtimeSessionRequest {
            model: self.upstream.realtime_model.clone(),
            voice: DEFAULT_VOICE.to_string(),
        };

        match self.client.create_realtime_session(api_key, &request).await {
            Ok(session) => {
                info!("Realtime session created for model {}", request.model);
                Ok(session)
            }
            Err(UpstreamError::Status { status, body }) => {
                error!("OpenAI API error: {}", body);
                Err(GatewayError::SessionRejected { status })
            }
            Err(UpstreamError::Transport(message)) => {
                error!("Ephemeral session error: {}", message);
                Err(GatewayError::Internal(message))
            }
        }
    }
}
