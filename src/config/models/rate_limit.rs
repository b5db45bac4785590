//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Rate limiting configuration for the chat proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Sliding window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    /// Requests allowed per client within one window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Header the client identifier is read from
    #[serde(default = "default_client_id_header")]
    pub client_id_header: String,
    /// What to do when the client identifier header is absent
    #[serde(default)]
    pub missing_client_policy: MissingClientPolicy,
    /// Bucket key used by the shared-bucket policy
    #[serde(default = "default_shared_bucket_key")]
    pub shared_bucket_key: String,
    /// Seconds between sweeps of idle client entries
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_ms: default_window_ms(),
            max_requests: default_max_requests(),
            client_id_header: default_client_id_header(),
            missing_client_policy: MissingClientPolicy::default(),
            shared_bucket_key: default_shared_bucket_key(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

impl RateLimitConfig {
    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window_ms == 0 {
            return Err("Rate limit window cannot be 0".to_string());
        }
        if self.max_requests == 0 {
            return Err("Rate limit max_requests cannot be 0".to_string());
        }
        if self.client_id_header.trim().is_empty() {
            return Err("Client identifier header cannot be empty".to_string());
        }
        if self.sweep_interval_secs == 0 {
            return Err("Sweep interval cannot be 0".to_string());
        }
        Ok(())
    }
}

/// Policy for requests that carry no client identifier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingClientPolicy {
    /// Count all anonymous callers against one shared bucket
    #[default]
    SharedBucket,
    /// Refuse the request
    Reject,
}
