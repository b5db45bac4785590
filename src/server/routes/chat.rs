//! Chat proxy endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

/// `POST /api/chat`
pub async fn chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, GatewayError> {
    let header = &state.config.rate_limit().client_id_header;
    let client_id = req
        .headers()
        .get(header.as_str())
        .and_then(|v| v.to_str().ok());

    let reply = state.chat.handle(client_id, &body).await?;
    info!("Chat reply produced in {} ms", reply.latency_ms);

    Ok(HttpResponse::Ok().json(ApiResponse::success(reply)))
}
