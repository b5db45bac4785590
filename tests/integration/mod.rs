//! Integration tests over the HTTP surface

mod chat_tests;
mod health_tests;
mod realtime_tests;
mod run_tests;
