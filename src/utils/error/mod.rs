//! Error handling utilities
//!
//! Defines the gateway error type and its HTTP rendering.

pub mod error;

pub use error::*;
