//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod gateway;
pub mod rate_limit;
pub mod server;
pub mod upstream;

pub use gateway::*;
pub use rate_limit::*;
pub use server::*;
pub use upstream::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default sliding window length (5 minutes)
pub fn default_window_ms() -> u64 {
    5 * 60 * 1000
}

/// Default requests allowed per window
pub fn default_max_requests() -> u32 {
    10
}

pub fn default_client_id_header() -> String {
    "x-forwarded-for".to_string()
}

pub fn default_shared_bucket_key() -> String {
    "unknown".to_string()
}

pub fn default_sweep_interval_secs() -> u64 {
    60
}

pub fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_chat_model() -> String {
    "gpt-4o-mini".to_string()
}

pub fn default_realtime_model() -> String {
    "gpt-4o-realtime-preview".to_string()
}

pub fn default_system_prompt() -> String {
    "You are a concise demo assistant. Keep replies <= 120 words.".to_string()
}

pub fn default_max_tokens() -> u32 {
    300
}

pub(crate) fn default_true() -> bool {
    true
}
