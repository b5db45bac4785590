//! Maintenance helpers for the rate limiter

use super::limiter::SlidingWindowLimiter;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::debug;

impl SlidingWindowLimiter {
    /// Drop expired timestamps and forget clients with none left.
    ///
    /// Returns the number of client keys removed.
    pub async fn cleanup(&self) -> usize {
        self.cleanup_at(Instant::now()).await
    }

    pub async fn cleanup_at(&self, now: Instant) -> usize {
        let window = self.window;
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, timestamps| {
            timestamps.retain(|&t| now.saturating_duration_since(t) < window);
            !timestamps.is_empty()
        });
        before - entries.len()
    }

    /// Start background cleanup task
    pub fn start_cleanup_task(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let removed = self.cleanup().await;
                if removed > 0 {
                    debug!("Rate limiter sweep removed {} idle clients", removed);
                }
            }
        })
    }

    /// Number of client keys currently tracked
    pub async fn tracked_clients(&self) -> usize {
        self.entries.read().await.len()
    }
}
