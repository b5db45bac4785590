//! Common test utilities for vissai-gateway

use actix_web::web;
use serde_json::{Value, json};
use vissai_gateway::Config;
use vissai_gateway::server::{AppState, HttpServer};

/// Key handed to the mock upstream
pub const TEST_API_KEY: &str = "sk-test-key";

/// Config pointing the upstream at `api_base`
pub fn test_config(api_base: &str, api_key: Option<&str>) -> Config {
    let mut config = Config::default();
    config.gateway.upstream.api_base = api_base.to_string();
    config.gateway.upstream.api_key = api_key.map(str::to_string);
    config.gateway.upstream.timeout = 5;
    config
}

/// Fresh application state; every call gets its own counters and limiter
pub fn app_state(config: &Config) -> web::Data<AppState> {
    let server = HttpServer::new(config).expect("server should build");
    web::Data::new(server.state().clone())
}

/// Canned chat completion body
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
