//! Tests for the HTTP client module

use super::*;
use crate::config::PagerConfig;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn url(server: &MockServer, rest: &str) -> url::Url {
    url::Url::parse(&format!("{}{rest}", server.uri())).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert!(config.timeout.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("pagewalk/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_http_client_config_from_pager_config() {
    let pager = PagerConfig::builder()
        .timeout_secs(5)
        .header("Accept", "application/json")
        .build();

    let config = HttpClientConfig::from(&pager);
    assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    assert_eq!(
        config.default_headers.get("Accept"),
        Some(&"application/json".to_string())
    );
}

#[test]
fn test_http_client_rejects_invalid_header() {
    let config = HttpClientConfig::builder()
        .header("Bad Header", "value")
        .build();

    assert!(matches!(
        HttpClient::with_config(config),
        Err(Error::InvalidConfigValue { .. })
    ));
}

#[test]
fn test_fetched_page_preview() {
    let page = FetchedPage::new(500, "internal server error");
    assert_eq!(page.body_preview(8), "internal");
}

#[test]
fn test_fetch_error_at_page() {
    let err = FetchError::Transport("refused".to_string()).at_page(3);
    assert!(matches!(err, Error::Transport { page: 3, .. }));

    let err = FetchError::BodyRead("eof".to_string()).at_page(5);
    assert!(matches!(err, Error::BodyRead { page: 5, .. }));
}

#[tokio::test]
async fn test_fetch_reads_whole_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(64 * 1024)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let page = client
        .fetch(&url(&mock_server, "/events?page=1"))
        .await
        .unwrap();

    assert_eq!(page.status, 200);
    assert_eq!(page.body.len(), 64 * 1024);
}

#[tokio::test]
async fn test_fetch_returns_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let page = client.fetch(&url(&mock_server, "/missing")).await.unwrap();

    assert_eq!(page.status, 404);
    assert_eq!(page.body_preview(100), "not found");
}

#[tokio::test]
async fn test_fetch_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("X-API-Key", "secret123"))
        .and(header("User-Agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("X-API-Key", "secret123")
        .user_agent("test-agent/1.0")
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let page = client.fetch(&url(&mock_server, "/secure")).await.unwrap();

    assert_eq!(page.status, 200);
}

#[tokio::test]
async fn test_fetch_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(200))
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let result = client.fetch(&url(&mock_server, "/slow")).await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_transport_error() {
    // Grab a free port, then close it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = HttpClient::new().unwrap();
    let target = url::Url::parse(&format!("http://127.0.0.1:{port}/events")).unwrap();
    let result = client.fetch(&target).await;

    match result {
        Err(FetchError::Transport(message)) => assert!(!message.is_empty()),
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_truncated_body_is_body_read_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Promise 100 bytes, send 5, then hang up
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let client = HttpClient::new().unwrap();
    let target = url::Url::parse(&format!("http://{addr}/events")).unwrap();
    let result = client.fetch(&target).await;

    match result {
        Err(FetchError::BodyRead(message)) => assert!(!message.is_empty()),
        other => panic!("Expected body read error, got {other:?}"),
    }

    server.await.unwrap();
}
