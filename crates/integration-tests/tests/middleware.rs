mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;
use lms_config::{AnyOrArray, CorsConfig};
use lms_server::SECURITY_HEADERS;

fn cors(origins: AnyOrArray) -> CorsConfig {
    CorsConfig {
        origins,
        methods: AnyOrArray::Any,
        headers: AnyOrArray::Any,
        expose_headers: Vec::new(),
        credentials: false,
        max_age: None,
    }
}

// -- CORS tests --

#[tokio::test]
async fn cors_allows_configured_origin() {
    let config = ConfigBuilder::new()
        .with_cors(cors(AnyOrArray::List(vec!["http://example.com".to_owned()])))
        .build();

    let server = TestServer::start(config, harness::api::router()).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/health"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://example.com")
    );
}

#[tokio::test]
async fn cors_rejects_unlisted_origin() {
    let config = ConfigBuilder::new()
        .with_cors(cors(AnyOrArray::List(vec!["http://example.com".to_owned()])))
        .build();

    let server = TestServer::start(config, harness::api::router()).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/health"))
        .header("Origin", "http://evil.com")
        .send()
        .await
        .unwrap();

    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn cors_headers_on_error_envelopes() {
    let config = ConfigBuilder::new().with_cors(cors(AnyOrArray::Any)).build();

    let server = TestServer::start(config, harness::api::router()).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/api/broken"))
        .header("Origin", "http://anywhere.example")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

// -- Security header tests --

#[tokio::test]
async fn security_headers_on_every_response() {
    let server = TestServer::start(ConfigBuilder::new().build(), harness::api::router())
        .await
        .unwrap();

    for path in ["/", "/api/courses/42", "/api/panic"] {
        let resp = server.client().get(server.url(path)).send().await.unwrap();

        for (name, value) in SECURITY_HEADERS {
            assert_eq!(
                resp.headers().get(name).and_then(|v| v.to_str().ok()),
                Some(value),
                "{path} {name}"
            );
        }
    }
}

#[tokio::test]
async fn security_headers_disabled() {
    let config = ConfigBuilder::new().without_security_headers().build();
    let server = TestServer::start(config, harness::api::router()).await.unwrap();

    let resp = server.client().get(server.url("/")).send().await.unwrap();

    assert!(resp.headers().get("x-content-type-options").is_none());
}

// -- Compression tests --

#[tokio::test]
async fn responses_are_gzipped_on_request() {
    let server = TestServer::start(ConfigBuilder::new().build(), harness::api::router())
        .await
        .unwrap();

    let resp = server
        .client()
        .get(server.url("/api/courses/1"))
        .header("Accept-Encoding", "gzip")
        .send()
        .await
        .unwrap();

    assert_eq!(
        resp.headers().get("content-encoding").and_then(|v| v.to_str().ok()),
        Some("gzip")
    );
}

#[tokio::test]
async fn compression_disabled() {
    let config = ConfigBuilder::new().without_compression().build();
    let server = TestServer::start(config, harness::api::router()).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/api/courses/1"))
        .header("Accept-Encoding", "gzip")
        .send()
        .await
        .unwrap();

    assert!(resp.headers().get("content-encoding").is_none());
}
