use super::*;
use crate::config::{Config, RetryConfig};
use crate::service::DirectorService;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::MockServer;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

mod directors;
mod system;

/// Config pointing the service at a mock catalog, with no retries so
/// failure tests stay fast
fn test_config(catalog_url: &str) -> Config {
    let mut config = Config::default();
    config.catalog.base_url = catalog_url.to_string();
    config.catalog.retry = RetryConfig {
        max_attempts: 0,
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(10),
        backoff_multiplier: 2.0,
        jitter: false,
    };
    config
}

/// Build a router backed by the given catalog URL
fn test_app(catalog_url: &str) -> Router {
    let config = Arc::new(test_config(catalog_url));
    let service = Arc::new(DirectorService::new(&config).expect("service should build"));
    create_router(service, config)
}

/// Mount a single-page catalog of the given directors on the mock server
async fn mount_catalog(server: &MockServer, directors: &[&str]) {
    let data: Vec<serde_json::Value> = directors
        .iter()
        .map(|d| serde_json::json!({"Title": format!("Movie by {d}"), "Director": d}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page": 1,
            "per_page": 10,
            "total": data.len(),
            "total_pages": 1,
            "data": data,
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_api_server_spawns() {
    let server = MockServer::start().await;
    let mut config = test_config(&server.uri());
    config.api.bind_address = "127.0.0.1:0".parse().unwrap(); // Port 0 = OS assigns a free port
    let config = Arc::new(config);
    let service = Arc::new(DirectorService::new(&config).unwrap());

    // Spawn the API server
    let api_handle = tokio::spawn({
        let service = service.clone();
        let config = config.clone();
        async move { start_api_server(service, config).await }
    });

    // Give it a moment to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Abort the server task (no graceful shutdown mechanism needed here)
    api_handle.abort();
}

#[tokio::test]
async fn test_cors_enabled() {
    let server = MockServer::start().await;
    mount_catalog(&server, &[]).await;

    let mut config = test_config(&server.uri());
    config.api.cors_enabled = true;
    config.api.cors_origins = vec!["*".to_string()];
    let config = Arc::new(config);
    let service = Arc::new(DirectorService::new(&config).unwrap());
    let app = create_router(service, config);

    let request = Request::builder()
        .uri("/api/v1/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin"),
        "CORS headers should be present when enabled"
    );
}

#[tokio::test]
async fn test_cors_disabled_omits_headers() {
    let server = MockServer::start().await;

    let mut config = test_config(&server.uri());
    config.api.cors_enabled = false;
    let config = Arc::new(config);
    let service = Arc::new(DirectorService::new(&config).unwrap());
    let app = create_router(service, config);

    let request = Request::builder()
        .uri("/api/v1/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        !response
            .headers()
            .contains_key("access-control-allow-origin"),
        "CORS headers should be absent when disabled"
    );
}
