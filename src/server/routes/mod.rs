//! HTTP route modules
//!
//! Every endpoint lives under the `/api` scope.

pub mod chat;
pub mod health;
pub mod realtime;
pub mod run;

use actix_web::web;
use serde::Serialize;

/// Successful response envelope: `{"ok": true, ...fields}`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Mount all API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/run", web::post().to(run::run))
            .route("/healthz", web::get().to(health::health_check))
            .route("/chat", web::post().to(chat::chat))
            .route("/realtime/ephemeral", web::post().to(realtime::ephemeral_session)),
    );
}
