//! `POST /api/realtime/ephemeral`

use crate::common::{TEST_API_KEY, app_state, test_config};
use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};
use vissai_gateway::server::HttpServer;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ephemeral_request() -> test::TestRequest {
    test::TestRequest::post().uri("/api/realtime/ephemeral")
}

#[actix_web::test]
async fn test_session_is_returned_verbatim() {
    let session = json!({
        "id": "sess_123",
        "object": "realtime.session",
        "model": "gpt-4o-realtime-preview",
        "client_secret": {"value": "ek_abc", "expires_at": 1700000000}
    });

    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/realtime/sessions"))
        .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
        .and(header("openai-beta", "realtime=v1"))
        .and(body_json(json!({"model": "gpt-4o-realtime-preview", "voice": "default"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(session.clone()))
        .expect(1)
        .mount(&upstream)
        .await;

    let state = app_state(&test_config(&upstream.uri(), Some(TEST_API_KEY)));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let resp = test::call_service(&app, ephemeral_request().to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, session);
}

#[actix_web::test]
async fn test_missing_key() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let state = app_state(&test_config(&upstream.uri(), None));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let resp = test::call_service(&app, ephemeral_request().to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "OpenAI API key not configured");
}

#[actix_web::test]
async fn test_upstream_status_is_passed_through() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/realtime/sessions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&upstream)
        .await;

    let state = app_state(&test_config(&upstream.uri(), Some(TEST_API_KEY)));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let resp = test::call_service(&app, ephemeral_request().to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to create ephemeral session");
    assert!(body.get("detail").is_none());
}

#[actix_web::test]
async fn test_transport_failure_is_internal_error() {
    let state = app_state(&test_config("http://127.0.0.1:9", Some(TEST_API_KEY)));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let resp = test::call_service(&app, ephemeral_request().to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");
}
