//! Tests for the HTTP transport module

use super::client::{extract_error_message, parse_body};
use super::*;
use crate::auth::AuthConfig;
use crate::error::Error;
use crate::types::{BackoffType, StringMap};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, body_string_contains, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .service_url(format!("{}/event-notifications", server.uri()))
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 0);
    assert!(config.user_agent.starts_with("event-notifications-rust/"));
    assert_eq!(config.auth, AuthConfig::None);
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .service_url("https://api.example.com")
        .auth(AuthConfig::bearer("t"))
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(30),
        )
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.service_url, "https://api.example.com");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_with_config_rejects_bad_url() {
    let config = HttpClientConfig::builder().service_url("not a url").build();
    assert!(matches!(
        HttpClient::with_config(config),
        Err(Error::InvalidUrl(_))
    ));
}

#[test]
fn test_calculate_backoff() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Exponential,
            Duration::from_millis(100),
            Duration::from_millis(500),
        )
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(400));
    assert_eq!(client.calculate_backoff(3), Duration::from_millis(500));
}

#[test]
fn test_parse_body() {
    assert_eq!(parse_body(""), serde_json::Value::Null);
    assert_eq!(parse_body("  \n"), serde_json::Value::Null);
    assert_eq!(parse_body(r#"{"a":1}"#), json!({"a": 1}));
    assert_eq!(parse_body("plain"), json!("plain"));
}

#[test]
fn test_extract_error_message() {
    let body = r#"{"errors":[{"code":"not_found","message":"Source not found"}],"trace":"t"}"#;
    assert_eq!(
        extract_error_message(body),
        Some("Source not found".to_string())
    );
    assert_eq!(
        extract_error_message(r#"{"message":"bad"}"#),
        Some("bad".to_string())
    );
    assert_eq!(extract_error_message("oops"), Some("oops".to_string()));
    assert_eq!(extract_error_message(""), None);
    assert_eq!(
        extract_error_message(r#"{"code":400,"trace":"abc"}"#),
        Some(r#"{"code":400,"trace":"abc"}"#.to_string())
    );
}

#[tokio::test]
async fn test_get_renders_path_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/event-notifications/v1/instances/inst-1/sources"))
        .and(query_param("limit", "10"))
        .and(query_param("search", "alpha"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 0,
            "sources": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::get("/v1/instances/{instance_id}/sources")
        .path_param("instance_id", "inst-1")
        .query("limit", 10)
        .query("search", "alpha");

    let response = client_for(&server).send(request).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.result["total_count"], 0);
}

#[tokio::test]
async fn test_post_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/event-notifications/v1/instances/i/sources"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "src", "description": "d"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "s-1"})))
        .mount(&server)
        .await;

    let request = ApiRequest::post("/v1/instances/{instance_id}/sources")
        .path_param("instance_id", "i")
        .json(json!({"name": "src", "description": "d"}));

    let response = client_for(&server).send(request).await.unwrap();
    assert_eq!(response.status, 201);
    assert_eq!(response.result["id"], "s-1");
}

#[tokio::test]
async fn test_delete_empty_body_is_null() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/event-notifications/v1/instances/i/sources/s"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let request = ApiRequest::delete("/v1/instances/{instance_id}/sources/{id}")
        .path_param("instance_id", "i")
        .path_param("id", "s");

    let response = client_for(&server).send(request).await.unwrap();
    assert_eq!(response.status, 204);
    assert!(response.result.is_null());
}

#[tokio::test]
async fn test_multipart_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/event-notifications/v1/instances/i/destinations"))
        .and(header_exists("content-type"))
        .and(body_string_contains("name=\"name\""))
        .and(body_string_contains("webhook-dest"))
        .and(body_string_contains("name=\"certificate\""))
        .and(body_string_contains("PEMDATA"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "d-1"})))
        .mount(&server)
        .await;

    let request = ApiRequest::post("/v1/instances/{instance_id}/destinations")
        .path_param("instance_id", "i")
        .multipart(vec![
            FormPart::text("name", "webhook-dest"),
            FormPart::file(
                "certificate",
                b"PEMDATA".to_vec(),
                Some("cert.pem".to_string()),
                None,
            ),
        ]);

    let response = client_for(&server).send(request).await.unwrap();
    assert_eq!(response.result["id"], "d-1");
}

#[tokio::test]
async fn test_caller_headers_override_computed_and_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/event-notifications/v1/ping"))
        .and(header("Accept", "text/plain"))
        .and(header("Authorization", "Bearer override"))
        .and(header("X-Default", "yes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .service_url(format!("{}/event-notifications", server.uri()))
        .auth(AuthConfig::bearer("configured"))
        .header("X-Default", "yes")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let mut overrides = StringMap::new();
    overrides.insert("Accept".to_string(), "text/plain".to_string());
    overrides.insert("Authorization".to_string(), "Bearer override".to_string());

    let response = client
        .send(ApiRequest::get("/v1/ping").headers(&overrides))
        .await
        .unwrap();
    assert_eq!(response.result, json!("pong"));
}

#[tokio::test]
async fn test_bearer_auth_applied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .service_url(server.uri())
        .auth(AuthConfig::bearer("secret"))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client.send(ApiRequest::get("/v1/ping")).await.unwrap();
    assert_eq!(response.result["ok"], true);
}

#[tokio::test]
async fn test_client_error_maps_to_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/event-notifications/v1/instances/i/topics/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "not_found", "message": "Topic not found"}]
        })))
        .mount(&server)
        .await;

    let request = ApiRequest::get("/v1/instances/{instance_id}/topics/{id}")
        .path_param("instance_id", "i")
        .path_param("id", "missing");

    let err = client_for(&server).send(request).await.unwrap_err();
    match err {
        Error::HttpStatus { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Topic not found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_not_retried_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/event-notifications/v1/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send(ApiRequest::get("/v1/flaky"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn test_retry_on_500_when_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .service_url(server.uri())
        .max_retries(3)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_millis(100),
        )
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client.send(ApiRequest::get("/v1/flaky")).await.unwrap();
    assert_eq!(response.result["ok"], true);
}

#[tokio::test]
async fn test_retries_exhausted_returns_last_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/down"))
        .respond_with(ResponseTemplate::new(502))
        .expect(3)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .service_url(server.uri())
        .max_retries(2)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(5),
            Duration::from_millis(5),
        )
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.send(ApiRequest::get("/v1/down")).await.unwrap_err();
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_retry_after_capped_by_max_backoff() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/busy"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "3600"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/busy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .service_url(server.uri())
        .max_retries(1)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(5),
            Duration::from_millis(20),
        )
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = tokio::time::timeout(
        Duration::from_secs(5),
        client.send(ApiRequest::get("/v1/busy")),
    )
    .await
    .expect("Retry-After should be capped")
    .unwrap();
    assert_eq!(response.result["ok"], true);
}

#[tokio::test]
async fn test_json_error_without_message_keeps_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/odd"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"code": 400, "trace": "abc"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send(ApiRequest::get("/v1/odd"))
        .await
        .unwrap_err();
    match err {
        Error::HttpStatus { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("\"trace\""));
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}
