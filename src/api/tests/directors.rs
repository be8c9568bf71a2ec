//! Tests for the directors endpoint.

use super::*;
use crate::error::ApiError;
use crate::types::DirectorsResponse;

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn valid_threshold_returns_sorted_directors() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        &["Zed Zag", "Amy Ant", "Zed Zag", "Amy Ant", "Solo Shot"],
    )
    .await;

    let app = test_app(&server.uri());
    let (status, body) = get(app, "/api/v1/directors?threshold=1").await;

    assert_eq!(status, StatusCode::OK);
    let response: DirectorsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        response.directors,
        vec!["Amy Ant".to_string(), "Zed Zag".to_string()]
    );
}

#[tokio::test]
async fn zero_threshold_is_rejected_before_the_core_runs() {
    let server = MockServer::start().await;

    let app = test_app(&server.uri());
    let (status, body) = get(app, "/api/v1/directors?threshold=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let api_error: ApiError = serde_json::from_slice(&body).unwrap();
    assert_eq!(api_error.error.code, "invalid_threshold");

    assert!(
        server.received_requests().await.unwrap().is_empty(),
        "no catalog request may be issued for an invalid threshold"
    );
}

#[tokio::test]
async fn negative_threshold_is_rejected() {
    let server = MockServer::start().await;

    let app = test_app(&server.uri());
    let (status, body) = get(app, "/api/v1/directors?threshold=-5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let api_error: ApiError = serde_json::from_slice(&body).unwrap();
    assert_eq!(api_error.error.code, "invalid_threshold");
    assert_eq!(api_error.error.details.unwrap()["threshold"], -5);
}

#[tokio::test]
async fn missing_threshold_is_a_bad_request() {
    let server = MockServer::start().await;

    let app = test_app(&server.uri());
    let (status, _body) = get(app, "/api/v1/directors").await;

    assert_eq!(
        status,
        StatusCode::BAD_REQUEST,
        "query extraction rejects a missing threshold"
    );
}

#[tokio::test]
async fn non_numeric_threshold_is_a_bad_request() {
    let server = MockServer::start().await;

    let app = test_app(&server.uri());
    let (status, _body) = get(app, "/api/v1/directors?threshold=lots").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn no_qualifying_directors_returns_empty_array_not_404() {
    let server = MockServer::start().await;
    mount_catalog(&server, &["One Hit", "Another One"]).await;

    let app = test_app(&server.uri());
    let (status, body) = get(app, "/api/v1/directors?threshold=10").await;

    assert_eq!(status, StatusCode::OK);
    let response: DirectorsResponse = serde_json::from_slice(&body).unwrap();
    assert!(response.directors.is_empty());
}

#[tokio::test]
async fn catalog_page_one_failure_maps_to_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let (status, body) = get(app, "/api/v1/directors?threshold=1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let api_error: ApiError = serde_json::from_slice(&body).unwrap();
    assert_eq!(api_error.error.code, "fatal_fetch");
}
