//! Health counters endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::time::serialize_iso_millis;
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// Counter values reported by the health check
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub requests: u64,
    pub drafts: u64,
    pub avg_latency: f64,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
}

/// `GET /api/healthz`
///
/// `requests` includes this call. `avgLatency` averages the earlier health
/// checks only; this call's latency is recorded for the next one. The handler
/// does no I/O, so the recorded latency is close to zero.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let started = Instant::now();
    let timestamp = Utc::now();

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    let snapshot = state.metrics.record_request(elapsed_ms);
    debug!(
        requests = snapshot.requests,
        latency_ms = elapsed_ms,
        "Health check served"
    );

    HttpResponse::Ok().json(ApiResponse::success(HealthReport {
        requests: snapshot.requests,
        drafts: snapshot.drafts,
        avg_latency: snapshot.avg_latency_rounded(),
        timestamp,
    }))
}
