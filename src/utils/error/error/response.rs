//! HTTP response handling for errors
//!
//! Every failure is rendered as an `{ "ok": false, ... }` body.

use super::types::GatewayError;
use crate::core::validation::FieldError;
use actix_web::http::StatusCode;
use actix_web::http::header::RETRY_AFTER;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

/// Failure body shared by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    fn message(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
            errors: None,
            detail: None,
        }
    }

    fn field_errors(errors: Vec<FieldError>) -> Self {
        Self {
            ok: false,
            error: None,
            errors: Some(errors),
            detail: None,
        }
    }
}

impl From<&GatewayError> for ErrorBody {
    fn from(err: &GatewayError) -> Self {
        match err {
            GatewayError::Validation(errors) => ErrorBody::field_errors(errors.clone()),
            GatewayError::InvalidBody => {
                ErrorBody::field_errors(vec![FieldError::body(err.to_string())])
            }
            GatewayError::Upstream { detail } => ErrorBody {
                detail: Some(detail.clone()),
                ..ErrorBody::message(err.to_string())
            },
            GatewayError::Config(_) | GatewayError::Internal(_) => {
                ErrorBody::message("Internal server error")
            }
            _ => ErrorBody::message(err.to_string()),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_)
            | GatewayError::InvalidBody
            | GatewayError::MissingClientId
            | GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::RateLimit { .. } => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            GatewayError::SessionRejected { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let GatewayError::RateLimit { retry_after_secs } = self {
            builder.insert_header((RETRY_AFTER, retry_after_secs.to_string()));
        }
        builder.json(ErrorBody::from(self))
    }
}
