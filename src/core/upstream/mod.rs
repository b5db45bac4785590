//! Client seam for the external OpenAI API
//!
//! The services depend on [`UpstreamClient`] rather than on `reqwest`
//! directly, so tests can point the real client at a mock server or swap in
//! a stub.

mod client;
mod types;

pub use client::OpenAiClient;
pub use types::{ChatCompletionRequest, ChatMessage, RealtimeSessionRequest};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure talking to the upstream API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status
    #[error("upstream returned status {status}")]
    Status { status: u16, body: String },
    /// Request never produced a usable response
    #[error("{0}")]
    Transport(String),
}

/// Operations the gateway forwards to the external API
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// POST a chat completion and return the raw response document
    async fn chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<Value, UpstreamError>;

    /// Mint an ephemeral realtime session and return the raw response document
    async fn create_realtime_session(
        &self,
        api_key: &str,
        request: &RealtimeSessionRequest,
    ) -> Result<Value, UpstreamError>;
}
