//! `POST /api/chat`

use crate::common::{TEST_API_KEY, app_state, completion, test_config};
use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};
use vissai_gateway::config::MissingClientPolicy;
use vissai_gateway::server::HttpServer;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_request(client: Option<&str>, body: Value) -> test::TestRequest {
    let mut req = test::TestRequest::post().uri("/api/chat").set_json(body);
    if let Some(client) = client {
        req = req.insert_header(("x-forwarded-for", client));
    }
    req
}

#[actix_web::test]
async fn test_chat_success() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 300,
            "messages": [
                {"role": "system", "content": "You are a concise demo assistant. Keep replies <= 120 words."},
                {"role": "user", "content": "Hello there"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Hi!")))
        .expect(1)
        .mount(&upstream)
        .await;

    let state = app_state(&test_config(&upstream.uri(), Some(TEST_API_KEY)));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let resp = test::call_service(
        &app,
        chat_request(Some("10.0.0.1"), json!({"message": "  Hello there "})).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["reply"], "Hi!");
    assert!(body["latency"].is_u64());
}

#[actix_web::test]
async fn test_chat_missing_key_makes_no_upstream_call() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&upstream)
        .await;

    let state = app_state(&test_config(&upstream.uri(), None));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let resp = test::call_service(&app, chat_request(Some("10.0.0.1"), json!({"message": "hi"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"ok": false, "error": "Server missing OPENAI_API_KEY"}));
}

#[actix_web::test]
async fn test_chat_empty_message() {
    let state = app_state(&test_config("http://127.0.0.1:9", Some(TEST_API_KEY)));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let resp = test::call_service(&app, chat_request(Some("10.0.0.1"), json!({"message": "   "})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"ok": false, "error": "message required"}));
}

#[actix_web::test]
async fn test_chat_eleventh_request_is_rate_limited() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        // ten from the first client, one from the second; the limited call never leaves
        .expect(11)
        .mount(&upstream)
        .await;

    let state = app_state(&test_config(&upstream.uri(), Some(TEST_API_KEY)));
    let app = test::init_service(HttpServer::create_app(state)).await;

    for _ in 0..10 {
        let resp =
            test::call_service(&app, chat_request(Some("10.0.0.7"), json!({"message": "hi"})).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = test::call_service(&app, chat_request(Some("10.0.0.7"), json!({"message": "hi"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let retry_after: u64 = resp
        .headers()
        .get("retry-after")
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(retry_after >= 1 && retry_after <= 300);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"ok": false, "error": "Rate limit"}));

    // a different client still has its full quota
    let resp = test::call_service(&app, chat_request(Some("10.0.0.8"), json!({"message": "hi"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_chat_upstream_error_is_bad_gateway() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&upstream)
        .await;

    let state = app_state(&test_config(&upstream.uri(), Some(TEST_API_KEY)));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let resp = test::call_service(&app, chat_request(Some("10.0.0.1"), json!({"message": "hi"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"ok": false, "error": "OpenAI upstream error", "detail": "quota exceeded"})
    );
}

#[actix_web::test]
async fn test_chat_falls_back_when_choices_missing() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&upstream)
        .await;

    let state = app_state(&test_config(&upstream.uri(), Some(TEST_API_KEY)));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let body: Value = test::call_and_read_body_json(
        &app,
        chat_request(Some("10.0.0.1"), json!({"message": "hi"})).to_request(),
    )
    .await;
    assert_eq!(body["reply"], "Sorry, I couldn't produce a reply.");
}

#[actix_web::test]
async fn test_chat_transport_failure() {
    // nothing listens on the discard port
    let state = app_state(&test_config("http://127.0.0.1:9", Some(TEST_API_KEY)));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let resp = test::call_service(&app, chat_request(Some("10.0.0.1"), json!({"message": "hi"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], false);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_chat_reject_policy_requires_client_id() {
    let mut config = test_config("http://127.0.0.1:9", Some(TEST_API_KEY));
    config.gateway.rate_limit.missing_client_policy = MissingClientPolicy::Reject;
    let state = app_state(&config);
    let app = test::init_service(HttpServer::create_app(state)).await;

    let resp = test::call_service(&app, chat_request(None, json!({"message": "hi"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"ok": false, "error": "client identifier required"}));
}
