//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::upstream::UpstreamClient;
use crate::core::{ChatProxy, MetricsCounter, RealtimeSessions, RunService, SlidingWindowLimiter};
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything is behind `Arc`, so cloning the state per worker is cheap and
/// all workers observe the same counters and rate limit windows.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Request and draft counters
    pub metrics: Arc<MetricsCounter>,
    /// Chat rate limiter
    pub limiter: Arc<SlidingWindowLimiter>,
    /// Draft responder
    pub run: RunService,
    /// Chat proxy
    pub chat: ChatProxy,
    /// Realtime session minting
    pub realtime: RealtimeSessions,
}

impl AppState {
    /// Wire up services around one upstream client
    pub fn new(config: Config, client: Arc<dyn UpstreamClient>) -> Self {
        let metrics = Arc::new(MetricsCounter::new());
        let limiter = Arc::new(SlidingWindowLimiter::new(config.rate_limit()));

        let run = RunService::new(metrics.clone());
        let chat = ChatProxy::new(
            limiter.clone(),
            client.clone(),
            config.upstream().clone(),
            config.rate_limit(),
        );
        let realtime = RealtimeSessions::new(client, config.upstream().clone());

        Self {
            config: Arc::new(config),
            metrics,
            limiter,
            run,
            chat,
            realtime,
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
