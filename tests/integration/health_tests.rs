//! `GET /api/healthz`

use crate::common::{app_state, test_config};
use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};
use vissai_gateway::server::HttpServer;

#[actix_web::test]
async fn test_health_counts_itself() {
    let state = app_state(&test_config("http://127.0.0.1:9", None));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let first: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/healthz").to_request(),
    )
    .await;
    assert_eq!(first["ok"], true);
    assert_eq!(first["requests"], 1);
    assert_eq!(first["drafts"], 0);
    // nothing was observed before the first call
    assert_eq!(first["avgLatency"].as_f64().unwrap(), 0.0);
    assert!(first["timestamp"].as_str().unwrap().ends_with('Z'));

    let second: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/healthz").to_request(),
    )
    .await;
    assert_eq!(second["requests"], 2);
    assert!(second["avgLatency"].as_f64().unwrap() >= 0.0);
}

#[actix_web::test]
async fn test_health_average_excludes_current_call() {
    let state = app_state(&test_config("http://127.0.0.1:9", None));
    state.metrics.record_request(12.0);
    state.metrics.record_request(8.0);
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/healthz").to_request(),
    )
    .await;
    assert_eq!(body["requests"], 3);
    assert_eq!(body["avgLatency"].as_f64().unwrap(), 10.0);
    assert_eq!(state.metrics.snapshot().requests, 3);
}

#[actix_web::test]
async fn test_health_reports_drafts() {
    let state = app_state(&test_config("http://127.0.0.1:9", None));
    let app = test::init_service(HttpServer::create_app(state)).await;

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/run")
            .set_json(json!({"reason": "booking"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    // rejected runs are not drafts
    let bad = test::TestRequest::post()
        .uri("/api/run")
        .set_json(json!({"name": ""}))
        .to_request();
    assert_eq!(test::call_service(&app, bad).await.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/healthz").to_request(),
    )
    .await;
    assert_eq!(body["drafts"], 3);
    assert_eq!(body["requests"], 1);
}

#[actix_web::test]
async fn test_state_is_shared_between_app_instances() {
    let state = app_state(&test_config("http://127.0.0.1:9", None));
    let first = test::init_service(HttpServer::create_app(state.clone())).await;
    let second = test::init_service(HttpServer::create_app(state)).await;

    test::call_service(&first, test::TestRequest::get().uri("/api/healthz").to_request()).await;
    let body: Value = test::call_and_read_body_json(
        &second,
        test::TestRequest::get().uri("/api/healthz").to_request(),
    )
    .await;
    assert_eq!(body["requests"], 2);
}
