//! Rate-limited chat proxy
//!
//! Sequence per request: rate limit, body, credential, upstream call.
//! No locks are held while the upstream call is in flight.

use crate::config::{MissingClientPolicy, RateLimitConfig, UpstreamConfig};
use crate::core::rate_limiter::SlidingWindowLimiter;
use crate::core::upstream::{ChatCompletionRequest, ChatMessage, UpstreamClient};
use crate::utils::error::{GatewayError, Result};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, warn};

/// Reply used when the upstream response has no usable content
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't produce a reply.";

/// Successful chat result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(rename = "latency")]
    pub latency_ms: u64,
}

/// Chat proxy service
#[derive(Clone)]
pub struct ChatProxy {
    limiter: Arc<SlidingWindowLimiter>,
    client: Arc<dyn UpstreamClient>,
    upstream: UpstreamConfig,
    missing_client_policy: MissingClientPolicy,
    shared_bucket_key: String,
}

impl ChatProxy {
    pub fn new(
        limiter: Arc<SlidingWindowLimiter>,
        client: Arc<dyn UpstreamClient>,
        upstream: UpstreamConfig,
        rate_limit: &RateLimitConfig,
    ) -> Self {
        Self {
            limiter,
            client,
            upstream,
            missing_client_policy: rate_limit.missing_client_policy,
            shared_bucket_key: rate_limit.shared_bucket_key.clone(),
        }
    }

    /// Rate limiter key for a caller, applying the missing-identifier policy
    pub fn client_key(&self, client_id: Option<&str>) -> Result<String> {
        match client_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => Ok(id.to_string()),
            None => match self.missing_client_policy {
                MissingClientPolicy::SharedBucket => Ok(self.shared_bucket_key.clone()),
                MissingClientPolicy::Reject => Err(GatewayError::MissingClientId),
            },
        }
    }

    /// Handle one chat request from `client_id` with raw body bytes
    pub async fn handle(&self, client_id: Option<&str>, body: &[u8]) -> Result<ChatReply> {
        let started = Instant::now();

        let key = self.client_key(client_id)?;
        let decision = self.limiter.check_and_record(&key).await;
        if !decision.allowed {
            warn!("Chat request from {} rate limited", key);
            return Err(GatewayError::RateLimit {
                retry_after_secs: decision.retry_after_secs().unwrap_or(1),
            });
        }

        let message = extract_message(body);
        if message.is_empty() {
            return Err(GatewayError::bad_request("message required"));
        }

        let api_key = self.upstream.credential().ok_or_else(|| {
            GatewayError::MissingCredential("Server missing OPENAI_API_KEY".to_string())
        })?;

        let request = ChatCompletionRequest {
            model: self.upstream.chat_model.clone(),
            messages: vec![
                ChatMessage::system(self.upstream.system_prompt.clone()),
                ChatMessage::user(message),
            ],
            max_tokens: self.upstream.max_tokens,
        };

        let response = self
            .client
            .chat_completion(api_key, &request)
            .await
            .map_err(|e| {
                error!("Chat upstream call failed: {}", e);
                GatewayError::from(e)
            })?;

        Ok(ChatReply {
            reply: first_choice_text(&response),
            latency_ms: started.elapsed().as_millis() as u64,
        })
    }
}

/// Trimmed `message` field; unparseable bodies and non-string values yield ""
fn extract_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .map(|m| m.trim().to_string())
        .unwrap_or_default()
}

/// Text of the first completion choice, or the fallback reply
fn first_choice_text(response: &Value) -> String {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or(FALLBACK_REPLY)
        .to_string()
}
