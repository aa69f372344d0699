//! Integration tests for middleware functionality.

use std::time::Duration;

use assert2::{check, let_assert};
use restkit::middleware::{ConcurrencyLimitLayer, LoggingLayer, RetryLayer, RetryPolicy};
use restkit::{
    ClientConfig, FailureKind, HyperTransport, Method, Request, ResourceClient, Transport,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn client(mock_server: &MockServer, transport: HyperTransport) -> ResourceClient<HyperTransport> {
    let config = ClientConfig::new(mock_server.uri()).expect("config");
    ResourceClient::new(transport, config)
}

fn with_retry(max_retries: u32) -> HyperTransport {
    HyperTransport::builder()
        .layer(RetryLayer::new(RetryPolicy::new(max_retries)))
        .build()
}

/// Test that logging middleware doesn't break the exchange.
#[tokio::test]
async fn test_logging_middleware() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::builder().layer(LoggingLayer::new()).build();

    let_assert!(Ok(success) = client(&mock_server, transport).get("todos", 1).await);
    check!(success.status() == 200);
}

/// Test debug-level logging on a failing exchange.
#[tokio::test]
async fn test_debug_logging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::builder().layer(LoggingLayer::debug()).build();

    let_assert!(Err(failure) = client(&mock_server, transport).delete("todos", 1).await);
    check!(failure.is_not_found());
}

/// Test that no retries happen for 4xx errors.
#[tokio::test]
async fn test_no_retry_on_client_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1) // Should only be called once, no retries
        .mount(&mock_server)
        .await;

    let_assert!(Err(failure) = client(&mock_server, with_retry(3)).get("todos", 1).await);
    check!(failure.kind() == FailureKind::ClientError);
}

/// Test retry on server error (5xx) for GET.
#[tokio::test]
async fn test_retry_get_on_server_error() {
    let mock_server = MockServer::start().await;

    // Server always returns 503, retry should exhaust attempts
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3) // Initial + 2 retries
        .mount(&mock_server)
        .await;

    let_assert!(Err(failure) = client(&mock_server, with_retry(2)).list("todos").await);

    // The 503 surfaces after exhausting retries
    check!(failure.kind() == FailureKind::ServerError);
    check!(failure.status() == Some(503));
}

/// Test retry on 429 Too Many Requests for PUT and DELETE.
#[tokio::test]
async fn test_retry_idempotent_writes_on_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(429))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(429))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, with_retry(1));
    let serde_json::Value::Object(attrs) = json!({"title": "x"}) else {
        unreachable!()
    };

    let_assert!(Err(failure) = client.replace("todos", 1, &attrs).await);
    check!(failure.status() == Some(429));

    let_assert!(Err(failure) = client.delete("todos", 1).await);
    check!(failure.status() == Some(429));
}

/// Test that POST and PATCH go out exactly once even with retry enabled.
#[tokio::test]
async fn test_no_retry_for_post_and_patch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, with_retry(3));
    let serde_json::Value::Object(attrs) = json!({"title": "x"}) else {
        unreachable!()
    };

    let_assert!(Err(failure) = client.create("todos", &attrs).await);
    check!(failure.kind() == FailureKind::ServerError);

    let_assert!(Err(failure) = client.update("todos", 1, &attrs).await);
    check!(failure.kind() == FailureKind::ServerError);
}

/// Test that a retry recovers once the server comes back.
#[tokio::test]
async fn test_retry_recovers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let_assert!(Ok(success) = client(&mock_server, with_retry(2)).get("todos", 1).await);
    check!(success.status() == 200);
}

/// Test the generic layer API with several layers composed.
#[tokio::test]
async fn test_middleware_composition() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(3)
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::builder()
        .timeout(Duration::from_secs(5))
        .layer(LoggingLayer::new())
        .layer(RetryLayer::new(RetryPolicy::new(2)))
        .layer(ConcurrencyLimitLayer::new(1))
        .build();
    let client = client(&mock_server, transport);

    let (a, b, c) = tokio::join!(client.list("todos"), client.list("todos"), client.list("todos"));
    check!(a.is_ok());
    check!(b.is_ok());
    check!(c.is_ok());
}

/// Test that layers see raw exchanges too.
#[tokio::test]
async fn test_raw_exchange_through_layers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&mock_server)
        .await;

    let transport = with_retry(1);
    let url = url::Url::parse(&format!("{}/health", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = transport.exchange(request).await.expect("response");
    check!(response.status() == 503);
}

/// Test the feature-gated helper methods.
#[cfg(feature = "middleware-full")]
#[tokio::test]
async fn test_builder_helpers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::builder()
        .with_debug_logging()
        .with_retry(2)
        .with_logging()
        .with_concurrency_limit(4)
        .build();

    let_assert!(Err(failure) = client(&mock_server, transport).list("todos").await);
    check!(failure.kind() == FailureKind::ServerError);
}
