//! Utility modules for the Gateway
//!
//! - **error**: error type and its HTTP mapping
//! - **time**: timestamp formatting

pub mod error;
pub mod time;
