//! Conversions into GatewayError

use super::types::GatewayError;
use crate::core::upstream::UpstreamError;

impl From<UpstreamError> for GatewayError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { body, .. } => GatewayError::Upstream { detail: body },
            UpstreamError::Transport(message) => GatewayError::Network(message),
        }
    }
}

impl From<Vec<crate::core::validation::FieldError>> for GatewayError {
    fn from(errors: Vec<crate::core::validation::FieldError>) -> Self {
        GatewayError::Validation(errors)
    }
}
