//! Draft responder endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use tracing::{debug, warn};

/// `POST /api/run`
pub async fn run(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, GatewayError> {
    debug!("Run request ({} bytes)", body.len());

    match state.run.handle(&body) {
        Ok(result) => Ok(HttpResponse::Ok().json(ApiResponse::success(result))),
        Err(e) => {
            warn!("Run request rejected: {}", e);
            Err(e)
        }
    }
}
