//! Core functionality for the Gateway
//!
//! Request handling logic, independent of the HTTP layer.

pub mod chat;
pub mod draft;
pub mod intent;
pub mod metrics;
pub mod rate_limiter;
pub mod realtime;
pub mod run;
pub mod upstream;
pub mod validation;

pub use chat::{ChatProxy, ChatReply};
pub use metrics::{MetricsCounter, MetricsSnapshot};
pub use rate_limiter::{RateLimitResult, SlidingWindowLimiter};
pub use realtime::RealtimeSessions;
pub use run::{RunRequest, RunResult, RunService};
