//! Core rate limiter implementation

use super::types::RateLimitResult;
use crate::config::models::rate_limit::RateLimitConfig;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Sliding window rate limiter keyed by client identifier
pub struct SlidingWindowLimiter {
    /// Whether limiting is applied at all
    pub(super) enabled: bool,
    /// Maximum requests per window
    pub(super) max_requests: u32,
    /// Window duration
    pub(super) window: Duration,
    /// Request timestamps by client identifier, oldest first
    pub(super) entries: Arc<RwLock<HashMap<String, Vec<Instant>>>>,
}

impl SlidingWindowLimiter {
    /// Create a limiter from configuration
    pub fn new(config: &RateLimitConfig) -> Self {
        Self::with_window(
            config.enabled,
            config.max_requests,
            Duration::from_millis(config.window_ms),
        )
    }

    /// Create a limiter with an explicit window
    pub fn with_window(enabled: bool, max_requests: u32, window: Duration) -> Self {
        Self {
            enabled,
            max_requests,
            window,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Atomically check and record a request at the current instant
    pub async fn check_and_record(&self, key: &str) -> RateLimitResult {
        self.check_and_record_at(key, Instant::now()).await
    }

    /// Atomically check and record a request observed at `now`
    pub async fn check_and_record_at(&self, key: &str, now: Instant) -> RateLimitResult {
        if !self.enabled {
            return RateLimitResult::unlimited(self.max_requests);
        }
        self.slide_and_record(key, now).await
    }

    /// Whether a request from `key` is allowed right now (recording it if so)
    pub async fn allow(&self, key: &str) -> bool {
        self.check_and_record(key).await.allowed
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn limit(&self) -> u32 {
        self.max_requests
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Clone for SlidingWindowLimiter {
    fn clone(&self) -> Self {
        Self {
            enabled: self.enabled,
            max_requests: self.max_requests,
            window: self.window,
            entries: self.entries.clone(),
        }
    }
}
