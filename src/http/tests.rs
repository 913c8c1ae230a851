//! Tests for the HTTP transport

use super::*;
use crate::error::ErrorKind;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("trafikk-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .header("X-Client", "tests")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Client"),
        Some(&"tests".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_http_client_rejects_bad_header() {
    let config = HttpClientConfig::builder()
        .header("Bad Header", "x")
        .build();
    let err = HttpClient::with_config(config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Client);
    assert!(err.to_string().contains("Bad Header"));
}

#[tokio::test]
async fn test_http_client_posts_query_as_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"query": "{ ping }"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{"ping":true}}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client
        .send(&format!("{}/", mock_server.uri()), "{ ping }")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"data":{"ping":true}}"#);
}

#[tokio::test]
async fn test_http_client_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Client", "tests"))
        .and(header("user-agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("X-Client", "tests")
        .user_agent("test-agent/1.0")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let response = client.send(&mock_server.uri(), "{ a }").await.unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_http_client_returns_error_status_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client.send(&mock_server.uri(), "{ a }").await.unwrap();

    assert_eq!(response.status, 503);
    assert_eq!(response.body, "maintenance");
}

#[tokio::test]
async fn test_http_client_timeout_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client.send(&mock_server.uri(), "{ a }").await.unwrap_err();

    assert!(matches!(err, crate::Error::Http(_)));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(debug.contains("timeout"));
}
