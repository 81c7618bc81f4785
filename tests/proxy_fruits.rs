//! End-to-end tests for the catalog proxy against a mock upstream.

mod common;

use std::net::SocketAddr;

use common::mock_backend::{MockBackend, MockResponse};
use common::{sample_catalog, sample_catalog_json};
use fruitjar::catalog::Fruit;
use fruitjar::config::Config;
use fruitjar::proxy::{ProxyHandle, ProxyServer, API_KEY_HEADER};

struct Harness {
    upstream: MockBackend,
    addr: SocketAddr,
    handle: ProxyHandle,
    client: reqwest::Client,
}

impl Harness {
    async fn start() -> Self {
        let upstream = MockBackend::start().await;

        let mut config = Config::default();
        config.upstream.base_url = upstream.base_url();
        config.upstream.api_key = "test-key".to_string();
        config.proxy.bind_addr = "127.0.0.1:0".to_string();

        let mut server = ProxyServer::new(&config).unwrap();
        let addr = server.try_bind().await.unwrap();
        let handle = server.handle();
        tokio::spawn(server.run());

        Self {
            upstream,
            addr,
            handle,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        self.handle.shutdown();
    }
}

#[tokio::test]
async fn forwards_catalog_with_api_key_and_origin() {
    let harness = Harness::start().await;
    harness
        .upstream
        .enqueue_response(MockResponse::json(&sample_catalog_json()))
        .await;

    let resp = harness
        .client
        .get(harness.url("/api/fruits"))
        .header("origin", "https://jar.example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "https://jar.example.com"
    );
    assert_eq!(resp.headers()["content-type"], "application/json");
    let fruits: Vec<Fruit> = resp.json().await.unwrap();
    assert_eq!(fruits, sample_catalog());

    let requests = harness.upstream.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/fruits");
    assert_eq!(requests[0].header(API_KEY_HEADER), Some("test-key"));
    assert_eq!(requests[0].header("origin"), Some("https://jar.example.com"));
}

#[tokio::test]
async fn missing_origin_uses_default_and_wildcard_cors() {
    let harness = Harness::start().await;

    let resp = harness
        .client
        .get(harness.url("/api/fruits"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");

    let requests = harness.upstream.captured_requests().await;
    assert_eq!(requests[0].header("origin"), Some("http://localhost:5173"));
}

#[tokio::test]
async fn upstream_failure_is_surfaced_with_its_status() {
    let harness = Harness::start().await;
    harness
        .upstream
        .enqueue_response(MockResponse::error(500, "upstream exploded"))
        .await;

    let resp = harness
        .client
        .get(harness.url("/api/fruits"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "upstream_error");
    assert_eq!(
        body["error"]["message"],
        "Failed to fetch fruits: 500 Internal Server Error"
    );
    assert!(body["error"]["request_id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn non_json_upstream_body_is_a_bad_gateway() {
    let harness = Harness::start().await;
    harness
        .upstream
        .enqueue_response(MockResponse::text("not json"))
        .await;

    let resp = harness
        .client
        .get(harness.url("/api/fruits"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 502);
}

#[tokio::test]
async fn proxy_does_not_retry_upstream() {
    let harness = Harness::start().await;
    harness
        .upstream
        .enqueue_response(MockResponse::error(503, "busy"))
        .await;

    let resp = harness
        .client
        .get(harness.url("/api/fruits"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 503);
    assert_eq!(harness.upstream.request_count().await, 1);
}

#[tokio::test]
async fn health_reports_healthy() {
    let harness = Harness::start().await;

    let body: serde_json::Value = harness
        .client
        .get(harness.url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(harness.upstream.request_count().await, 0);
}

#[tokio::test]
async fn non_error_upstream_status_is_a_bad_gateway() {
    let harness = Harness::start().await;
    let mut redirect = MockResponse::error(302, "moved");
    redirect.content_type = "text/plain";
    harness.upstream.enqueue_response(redirect).await;

    let resp = harness
        .client
        .get(harness.url("/api/fruits"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 502);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "upstream_error");
}
