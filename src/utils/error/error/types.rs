//! Error types for the Gateway

use crate::core::validation::FieldError;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// One or more request fields failed their constraint
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Request body was not parseable JSON
    #[error("Invalid JSON body")]
    InvalidBody,

    /// Caller exceeded the sliding-window quota
    #[error("Rate limit")]
    RateLimit {
        /// Seconds until the oldest counted request leaves the window
        retry_after_secs: u64,
    },

    /// No client identifier header and the policy rejects anonymous callers
    #[error("client identifier required")]
    MissingClientId,

    /// Bad request errors
    #[error("{0}")]
    BadRequest(String),

    /// The upstream credential is not configured
    #[error("{0}")]
    MissingCredential(String),

    /// Upstream answered with a non-success status
    #[error("OpenAI upstream error")]
    Upstream {
        /// Raw upstream error text
        detail: String,
    },

    /// Upstream refused to mint a realtime session
    #[error("Failed to create ephemeral session")]
    SessionRejected {
        /// Upstream status, passed through to the caller
        status: u16,
    },

    /// Transport-level failure talking to the upstream
    #[error("{0}")]
    Network(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Server lifecycle errors (bind, run)
    #[error("{0}")]
    Server(String),
}

impl GatewayError {
    /// Create a server lifecycle error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Whether the error was caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidBody
                | Self::RateLimit { .. }
                | Self::MissingClientId
                | Self::BadRequest(_)
        )
    }
}
