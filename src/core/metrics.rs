//! In-memory request and draft counters
//!
//! Counters live for the lifetime of the process and are never persisted.
//! All four fields sit behind one mutex so each operation is a single
//! read-modify-write.

use parking_lot::Mutex;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy)]
struct MetricsState {
    request_count: u64,
    draft_count: u64,
    total_latency_ms: f64,
    latency_observations: u64,
}

impl MetricsState {
    fn avg_latency(&self) -> f64 {
        if self.latency_observations > 0 {
            self.total_latency_ms / self.latency_observations as f64
        } else {
            0.0
        }
    }

    fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.request_count,
            drafts: self.draft_count,
            avg_latency_ms: self.avg_latency(),
        }
    }
}

/// Point-in-time view of the counters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub drafts: u64,
    pub avg_latency_ms: f64,
}

impl MetricsSnapshot {
    /// Average latency rounded to two decimal places
    pub fn avg_latency_rounded(&self) -> f64 {
        (self.avg_latency_ms * 100.0).round() / 100.0
    }
}

/// Process-wide counters, shared through `AppState`
#[derive(Debug, Default)]
pub struct MetricsCounter {
    state: Mutex<MetricsState>,
}

impl MetricsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one health-check request and its latency.
    ///
    /// The returned snapshot includes this request in `requests`, but its
    /// average covers only the observations recorded before this one.
    pub fn record_request(&self, latency_ms: f64) -> MetricsSnapshot {
        let mut state = self.state.lock();
        state.request_count += 1;
        let snapshot = state.snapshot();
        state.total_latency_ms += latency_ms.max(0.0);
        state.latency_observations += 1;
        snapshot
    }

    /// Count one successfully generated draft
    pub fn increment_drafts(&self) {
        self.state.lock().draft_count += 1;
    }

    pub fn avg_latency(&self) -> f64 {
        self.state.lock().avg_latency()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.state.lock().snapshot()
    }

    /// Zero every counter
    pub fn reset(&self) {
        *self.state.lock() = MetricsState::default();
    }
}
