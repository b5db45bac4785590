//! Realtime session endpoint

use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};

/// `POST /api/realtime/ephemeral`
///
/// The upstream session document is returned without an envelope.
pub async fn ephemeral_session(state: web::Data<AppState>) -> Result<HttpResponse, GatewayError> {
    let session = state.realtime.create().await?;
    Ok(HttpResponse::Ok().json(session))
}
