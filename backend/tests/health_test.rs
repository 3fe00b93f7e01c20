//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
async fn test_readiness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ready");
    assert_eq!(json["checks"]["reference_tables"]["status"], "healthy");
    assert_eq!(json["checks"]["calculator_policy"]["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = common::TestApp::new();

    let (status, _) = app.get("/metrics").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let app = common::TestApp::new();
    let request = axum::http::Request::builder()
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app.app.clone(), request).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
