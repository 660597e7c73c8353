//! Tests for the auth module

use super::*;
use std::collections::HashMap;

fn build(auth: &Authenticator) -> reqwest::Request {
    let client = reqwest::Client::new();
    auth.apply(client.get("https://example.com/api"))
        .build()
        .unwrap()
}

#[test]
fn test_no_auth() {
    let req = build(&Authenticator::new(AuthConfig::None));
    assert!(req.headers().get("Authorization").is_none());
}

#[test]
fn test_bearer() {
    let req = build(&Authenticator::new(AuthConfig::bearer("my-token")));
    assert_eq!(req.headers().get("Authorization").unwrap(), "Bearer my-token");
}

#[test]
fn test_basic() {
    let req = build(&Authenticator::new(AuthConfig::basic("user", "pass")));
    // base64("user:pass")
    assert_eq!(
        req.headers().get("Authorization").unwrap(),
        "Basic dXNlcjpwYXNz"
    );
}

#[test]
fn test_api_key_default_header() {
    let req = build(&Authenticator::new(AuthConfig::ApiKey {
        header_name: None,
        prefix: Some("ApiKey ".to_string()),
        value: "abc".to_string(),
    }));
    assert_eq!(req.headers().get("Authorization").unwrap(), "ApiKey abc");
}

#[test]
fn test_api_key_custom_header() {
    let req = build(&Authenticator::new(AuthConfig::ApiKey {
        header_name: Some("X-API-Key".to_string()),
        prefix: None,
        value: "test-key-123".to_string(),
    }));
    assert_eq!(req.headers().get("X-API-Key").unwrap(), "test-key-123");
}

#[test]
fn test_custom_headers() {
    let mut headers = HashMap::new();
    headers.insert("X-Tenant".to_string(), "t1".to_string());
    headers.insert("X-Trace".to_string(), "on".to_string());

    let req = build(&Authenticator::new(AuthConfig::Headers { headers }));
    assert_eq!(req.headers().get("X-Tenant").unwrap(), "t1");
    assert_eq!(req.headers().get("X-Trace").unwrap(), "on");
}
