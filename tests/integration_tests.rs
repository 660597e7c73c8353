//! Integration tests using mock HTTP server
//!
//! Tests the full flow: options → validation → reqwest transport → typed response

use event_notifications::service::{
    Attachment, CreateDestinationOptions, DeleteTopicOptions, GetSourceOptions,
    ListSourcesOptions, ListSmtpUsersOptions, SendNotificationsOptions,
};
use event_notifications::{
    AuthConfig, DestinationConfig, DestinationType, Error, EventNotifications, HttpClientConfig,
    NotificationCreate, ServiceConfig,
};
use futures::TryStreamExt;
use serde_json::json;
use std::sync::Once;
use wiremock::matchers::{
    body_partial_json, body_string_contains, header, header_regex, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INSTANCE: &str = "inst-1";

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn client_for(server: &MockServer) -> EventNotifications {
    init_tracing();
    let config = HttpClientConfig::builder()
        .service_url(format!("{}/event-notifications", server.uri()))
        .auth(AuthConfig::bearer("test-token"))
        .build();
    EventNotifications::with_http_config(config).unwrap()
}

fn sources_path() -> String {
    format!("/event-notifications/v1/instances/{INSTANCE}/sources")
}

// ============================================================================
// Pagination
// ============================================================================

async fn mount_source_pages(server: &MockServer) {
    // Most specific first: wiremock picks the first matching mock
    Mock::given(method("GET"))
        .and(path(sources_path()))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "offset": 1,
            "limit": 1,
            "sources": [{"id": "s2", "name": "billing"}],
            "first": {"href": format!("{}{}?limit=1", server.uri(), sources_path())}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(sources_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "offset": 0,
            "limit": 1,
            "sources": [{"id": "s1", "name": "orders"}],
            "next": {"href": format!("{}{}?limit=1&offset=1", server.uri(), sources_path())}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_pager_walks_all_source_pages() {
    let server = MockServer::start().await;
    mount_source_pages(&server).await;
    let client = client_for(&server);

    let options = ListSourcesOptions {
        limit: Some(1),
        ..ListSourcesOptions::new(INSTANCE)
    };
    let mut pager = client.pager(options).unwrap();

    let mut names = Vec::new();
    while pager.has_next() {
        names.extend(pager.get_next().await.unwrap().into_iter().map(|s| s.name));
    }

    assert_eq!(names, ["orders", "billing"]);
    assert_eq!(pager.total_count(), Some(2));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_pager_stream_matches_get_all() {
    let server = MockServer::start().await;
    mount_source_pages(&server).await;
    let client = client_for(&server);

    let all = client
        .pager(ListSourcesOptions::new(INSTANCE))
        .unwrap()
        .get_all()
        .await
        .unwrap();
    let streamed: Vec<_> = client
        .pager(ListSourcesOptions::new(INSTANCE))
        .unwrap()
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(all, streamed);
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_pager_surfaces_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/event-notifications/v1/instances/{INSTANCE}/smtp/config/c1/users"
        )))
        .and(query_param("offset", "5"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": [{"code": "internal_error", "message": "backend unavailable"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/event-notifications/v1/instances/{INSTANCE}/smtp/config/c1/users"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"id": "u1", "smtp_config_id": "c1", "username": "a"}],
            "next": {"href": "/v1/instances/inst-1/smtp/config/c1/users?offset=5"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut pager = client
        .pager(ListSmtpUsersOptions::new(INSTANCE, "c1"))
        .unwrap();

    let err = pager.get_all().await.unwrap_err();
    match err {
        Error::HttpStatus { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "backend unavailable");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
    assert!(pager.has_next());
}

// ============================================================================
// Request builders
// ============================================================================

#[tokio::test]
async fn test_get_source_with_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/s1", sources_path())))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "req-42")
                .set_body_json(json!({
                    "id": "s1",
                    "name": "orders",
                    "enabled": true,
                    "topic_count": 3,
                    "topic_names": ["a", "b", "c"],
                    "updated_at": "2024-05-01T10:00:00Z"
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .get_source(&GetSourceOptions::new(INSTANCE, "s1"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.headers["x-request-id"], "req-42");
    assert_eq!(response.result.topic_names.len(), 3);
    assert_eq!(response.result.enabled, Some(true));
}

#[tokio::test]
async fn test_send_notification() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/event-notifications/v1/instances/{INSTANCE}/notifications"
        )))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "id": "evt-1",
            "type": "order.created",
            "specversion": "1.0",
            "ibmensourceid": "src-1"
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "request_id": "r-1",
            "notification_id": "evt-1",
            "status": "202"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let notification =
        NotificationCreate::new("evt-1", "app/orders", "order.created").source_id("src-1");
    let response = client
        .send_notifications(&SendNotificationsOptions::new(INSTANCE, notification))
        .await
        .unwrap();

    assert_eq!(response.status, 202);
    assert_eq!(response.result.request_id.as_deref(), Some("r-1"));
}

#[tokio::test]
async fn test_create_destination_sends_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/event-notifications/v1/instances/{INSTANCE}/destinations"
        )))
        .and(header_regex("Content-Type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"type\""))
        .and(body_string_contains("push_ios"))
        .and(body_string_contains("filename=\"apns.p12\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "d1",
            "name": "ios",
            "type": "push_ios",
            "created_at": "2024-05-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = CreateDestinationOptions {
        certificate: Some(
            Attachment::new(b"cert-bytes".to_vec())
                .filename("apns.p12")
                .content_type("application/x-pkcs12"),
        ),
        ..CreateDestinationOptions::new(INSTANCE, "ios", DestinationType::PushIos).config(
            DestinationConfig::default()
                .param("cert_type", "p12")
                .param("is_sandbox", true),
        )
    };

    let response = client.create_destination(&options).await.unwrap();
    assert_eq!(response.status, 201);
    assert_eq!(response.result.destination_type, DestinationType::PushIos);
}

#[tokio::test]
async fn test_delete_returns_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!(
            "/event-notifications/v1/instances/{INSTANCE}/topics/t1"
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .delete_topic(&DeleteTopicOptions::new(INSTANCE, "t1"))
        .await
        .unwrap();
    assert_eq!(response.status, 204);
}

#[tokio::test]
async fn test_not_found_maps_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/missing", sources_path())))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "not_found", "message": "Source not found"}],
            "status_code": 404
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_source(&GetSourceOptions::new(INSTANCE, "missing"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(!err.is_retryable());
    assert_eq!(err.to_string(), "HTTP 404: Source not found");
}

#[tokio::test]
async fn test_validation_never_reaches_server() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .get_source(&GetSourceOptions::new(INSTANCE, ""))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    assert!(client.pager(ListSourcesOptions::new("")).is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_client_from_yaml_config() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/s1", sources_path())))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .and(header("X-Team", "platform"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "s1", "name": "n"})))
        .expect(1)
        .mount(&server)
        .await;

    let yaml = format!(
        r"
service_url: {}/event-notifications
auth:
  type: basic
  username: user
  password: pass
http:
  timeout_secs: 5
  headers:
    X-Team: platform
",
        server.uri()
    );
    init_tracing();
    let config = ServiceConfig::from_yaml_str(&yaml).unwrap();
    let client = EventNotifications::new(&config).unwrap();

    let source = client
        .get_source(&GetSourceOptions::new(INSTANCE, "s1"))
        .await
        .unwrap()
        .into_result();
    assert_eq!(source.name, "n");
}
