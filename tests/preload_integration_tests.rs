use std::time::Duration;

use storybook::preload::{PreloadError, PreloadSummary, Preloader};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn preloader() -> Preloader {
    Preloader::new(Duration::from_secs(2))
}

async fn mount_image(server: &MockServer, route: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_returns_body_size() {
    let server = MockServer::start().await;
    mount_image(&server, "/page-1.png", b"\x89PNG fake image").await;

    let bytes = preloader()
        .fetch(&format!("{}/page-1.png", server.uri()))
        .await
        .unwrap();
    assert_eq!(bytes, 15);
}

#[tokio::test]
async fn test_fetch_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = preloader()
        .fetch(&format!("{}/missing.png", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, PreloadError::Status(404)));
}

#[tokio::test]
async fn test_preload_all_counts_successes_and_failures() {
    let server = MockServer::start().await;
    mount_image(&server, "/page-1.png", b"one").await;
    mount_image(&server, "/page-2.png", b"two").await;
    Mock::given(method("GET"))
        .and(path("/page-3.png"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let urls: Vec<String> = ["page-1", "page-2", "page-3"]
        .iter()
        .map(|p| format!("{}/{p}.png", server.uri()))
        .collect();

    let summary = preloader().preload_all(&urls).await;
    assert_eq!(summary, PreloadSummary { loaded: 2, failed: 1 });
}

#[tokio::test]
async fn test_unreachable_host_is_a_quiet_failure() {
    // Nothing listens on port 9 (discard) on a test machine
    let urls = vec!["http://127.0.0.1:9/page-1.png".to_string()];
    let summary = preloader().preload_all(&urls).await;
    assert_eq!(summary, PreloadSummary { loaded: 0, failed: 1 });
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.png"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let preloader = Preloader::new(Duration::from_millis(200));
    let err = preloader
        .fetch(&format!("{}/slow.png", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, PreloadError::Network(_)));
}
