//! Error handling for the Gateway
//!
//! This module defines all error types used throughout the gateway.

#![allow(missing_docs)]

mod conversions;
mod response;
mod types;

pub use response::ErrorBody;
pub use types::{GatewayError, Result};
