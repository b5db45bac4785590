//! `POST /api/run`

use crate::common::{app_state, test_config};
use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};
use vissai_gateway::server::HttpServer;

#[actix_web::test]
async fn test_run_returns_draft() {
    let state = app_state(&test_config("http://127.0.0.1:9", None));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/run")
        .set_json(json!({"name": "Ona", "reason": "Need help with login", "lang": "en"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["intent"], "support_request");
    assert!(body["draft"].as_str().unwrap().starts_with("Hello Ona,"));
    assert!(body["id"].is_string());
    assert!(body["latency"].is_u64());
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_run_malformed_json() {
    let state = app_state(&test_config("http://127.0.0.1:9", None));
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/run")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"ok": false, "errors": [{"path": null, "message": "Invalid JSON body"}]})
    );
    assert_eq!(state.metrics.snapshot().drafts, 0);
}

#[actix_web::test]
async fn test_run_reports_every_violation() {
    let state = app_state(&test_config("http://127.0.0.1:9", None));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/run")
        .set_json(json!({"name": "", "phone": "1", "reason": "", "action": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], false);
    assert_eq!(
        body["errors"],
        json!([
            {"path": "name", "message": "name cannot be empty"},
            {"path": "phone", "message": "phone too short"},
            {"path": "reason", "message": "reason required"},
            {"path": "action", "message": "action required"}
        ])
    );
}

#[actix_web::test]
async fn test_run_with_empty_body_uses_defaults() {
    let state = app_state(&test_config("http://127.0.0.1:9", None));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let req = test::TestRequest::post().uri("/api/run").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["ok"], true);
    assert_eq!(body["intent"], "information_request");
    assert!(body["draft"].as_str().unwrap().starts_with("Hello Customer,"));
}

#[actix_web::test]
async fn test_run_rejects_get() {
    let state = app_state(&test_config("http://127.0.0.1:9", None));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/run").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}
