//! API client integration tests against a mock server.

use dc_client::{ApiClient, ApiError, ClientConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client builds")
}

#[tokio::test]
async fn check_decodes_disposable_verdict() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/check"))
        .and(query_param("email", "user@tempmail.com"))
        .and(query_param("check_reachable", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "user@tempmail.com",
            "domain": "tempmail.com",
            "is_disposable": true,
            "is_valid_format": true,
            "checked_at": "2026-01-15T10:30:00Z",
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .check("user@tempmail.com", false)
        .await
        .expect("check succeeds");

    assert!(result.is_disposable);
    assert_eq!(result.domain, "tempmail.com");
    assert!(result.reacher.is_none());
}

#[tokio::test]
async fn check_forwards_reachability_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/check"))
        .and(query_param("check_reachable", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "user@example.com",
            "domain": "example.com",
            "is_disposable": false,
            "is_valid_format": true,
            "reacher": { "is_reachable": "safe" },
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .check("user@example.com", true)
        .await
        .expect("check succeeds");

    assert_eq!(result.reacher.unwrap()["is_reachable"], "safe");
}

#[tokio::test]
async fn stats_decodes_counters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_emails_checked": 1_247_893,
            "total_disposable_domains": 4521,
            "community_reports": 23,
        })))
        .mount(&server)
        .await;

    let stats = client_for(&server).stats().await.expect("stats succeed");
    assert_eq!(stats.total_emails_checked, 1_247_893);
    assert_eq!(stats.total_disposable_domains, 4521);
    assert_eq!(stats.community_reports, 23);
}

#[tokio::test]
async fn request_key_posts_bot_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/keys"))
        .and(body_partial_json(json!({
            "email": "dev@example.com",
            "token": "tok-123",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Key sent",
        })))
        .mount(&server)
        .await;

    let ack = client_for(&server)
        .request_key("dev@example.com", "tok-123")
        .await
        .expect("key request succeeds");

    assert_eq!(ack.message, "Key sent");
}

#[tokio::test]
async fn report_omits_absent_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/report"))
        .and(body_partial_json(json!({ "domain": "burner.example" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Thanks",
        })))
        .mount(&server)
        .await;

    let ack = client_for(&server)
        .report("burner.example", None)
        .await
        .expect("report succeeds");

    assert_eq!(ack.message.as_deref(), Some("Thanks"));
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/report"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": "Domain already in database",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .report("tempmail.com", None)
        .await
        .expect_err("report fails");

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Domain already in database");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/stats"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client_for(&server).stats().await.expect_err("stats fail");
    match err {
        ApiError::Api { status, .. } => assert_eq!(status, 503),
        other => panic!("unexpected error: {other}"),
    }
}
