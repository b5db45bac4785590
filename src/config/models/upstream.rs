//! Upstream (OpenAI) API configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Settings for the external chat and realtime APIs
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Bearer credential; requests needing it fail fast when absent
    #[serde(default)]
    pub api_key: Option<String>,
    /// API base URL without trailing slash
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Chat completion model
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Realtime session model
    #[serde(default = "default_realtime_model")]
    pub realtime_model: String,
    /// System instruction sent with every chat request
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Output token cap for chat completions
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            chat_model: default_chat_model(),
            realtime_model: default_realtime_model(),
            system_prompt: default_system_prompt(),
            max_tokens: default_max_tokens(),
            timeout: default_timeout(),
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_base", &self.api_base)
            .field("chat_model", &self.chat_model)
            .field("realtime_model", &self.realtime_model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl UpstreamConfig {
    /// Configured credential, treating blank strings as absent
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Validate upstream configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base.trim().is_empty() {
            return Err("Upstream api_base cannot be empty".to_string());
        }
        if self.timeout == 0 {
            return Err("Upstream timeout cannot be 0".to_string());
        }
        if self.max_tokens == 0 {
            return Err("Upstream max_tokens cannot be 0".to_string());
        }
        Ok(())
    }
}
