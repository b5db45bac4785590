//! Sliding window algorithm

use super::limiter::SlidingWindowLimiter;
use super::types::RateLimitResult;
use std::time::Instant;
use tracing::debug;

impl SlidingWindowLimiter {
    /// Purge expired timestamps for `key`, then record `now` if under the limit.
    ///
    /// The filter and append happen under one write lock.
    pub(super) async fn slide_and_record(&self, key: &str, now: Instant) -> RateLimitResult {
        let limit = self.max_requests;
        let window = self.window;

        let mut entries = self.entries.write().await;
        // Avoid String allocation if key already exists
        let timestamps = if let Some(ts) = entries.get_mut(key) {
            ts
        } else {
            entries.entry(key.to_string()).or_default()
        };

        timestamps.retain(|&t| now.saturating_duration_since(t) < window);

        let current_count = timestamps.len() as u32;
        if current_count >= limit {
            let retry_after = timestamps
                .first()
                .map(|&oldest| window.saturating_sub(now.saturating_duration_since(oldest)))
                .unwrap_or(window);

            debug!(
                "Rate limit exceeded for {}: {}/{} requests",
                key, current_count, limit
            );

            return RateLimitResult {
                allowed: false,
                current_count,
                limit,
                remaining: 0,
                retry_after: Some(retry_after),
            };
        }

        timestamps.push(now);

        RateLimitResult {
            allowed: true,
            current_count: current_count + 1,
            limit,
            remaining: limit - current_count - 1,
            retry_after: None,
        }
    }
}
