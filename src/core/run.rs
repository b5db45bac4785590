//! Draft responder behind `POST /run`

use crate::core::draft::{Lang, generate_draft};
use crate::core::intent::{IntentLabel, classify};
use crate::core::metrics::MetricsCounter;
use crate::core::validation::{FieldRule, validate};
use crate::utils::error::{GatewayError, Result};
use crate::utils::time::serialize_iso_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// Field constraints for a run request, in reporting order
pub const RUN_SCHEMA: &[FieldRule] = &[
    FieldRule::min_length("name", 1, "name cannot be empty"),
    FieldRule::min_length("phone", 3, "phone too short"),
    FieldRule::min_length("reason", 1, "reason required"),
    FieldRule::min_length("action", 1, "action required"),
    FieldRule::one_of("lang", Lang::CODES),
];

/// Run request with defaults applied
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunRequest {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_reason")]
    pub reason: String,
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(default)]
    pub lang: Lang,
}

fn default_name() -> String {
    "Customer".to_string()
}

fn default_reason() -> String {
    "general inquiry".to_string()
}

fn default_action() -> String {
    "information".to_string()
}

/// Successful run outcome
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub id: Uuid,
    pub intent: IntentLabel,
    pub draft: String,
    #[serde(rename = "latency")]
    pub latency_ms: u64,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RunService {
    metrics: Arc<MetricsCounter>,
}

impl RunService {
    pub fn new(metrics: Arc<MetricsCounter>) -> Self {
        Self { metrics }
    }

    /// Validate a raw body and produce a draft.
    ///
    /// An empty body is treated as `{}` so every default applies.
    pub fn handle(&self, raw: &[u8]) -> Result<RunResult> {
        let started = Instant::now();

        let body: Value = if raw.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Default::default())
        } else {
            serde_json::from_slice(raw).map_err(|e| {
                debug!("Rejecting unparseable run body: {}", e);
                GatewayError::InvalidBody
            })?
        };

        validate(&body, RUN_SCHEMA)?;

        let request: RunRequest =
            serde_json::from_value(body).map_err(|_| GatewayError::InvalidBody)?;

        let id = Uuid::new_v4();
        let intent = classify(&request.reason, &request.action);
        let draft = generate_draft(&request.name, &request.reason, &request.action, request.lang);
        self.metrics.increment_drafts();

        debug!("Run {} classified as {}", id, intent);

        Ok(RunResult {
            id,
            intent,
            draft,
            latency_ms: started.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        })
    }
}
