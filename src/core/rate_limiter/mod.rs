//! Rate Limiting Implementation
//!
//! Per-client sliding window limiter guarding the chat proxy.

mod limiter;
mod types;
mod utils;
mod window;


pub use limiter::SlidingWindowLimiter;
pub use types::RateLimitResult;
