//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use nemitzam_db::MemoryGateway;
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(&Arc::new(MemoryGateway::new()));
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["live_clients"], 0);
    assert_eq!(json["admin_sessions"], 0);
}

#[tokio::test]
async fn health_is_degraded_when_gateway_fails() {
    let gateway = Arc::new(MemoryGateway::new());
    gateway.fail_reads("connection refused");
    let app = common::build_test_app(&gateway);

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn health_counts_admin_sessions() {
    let gateway = Arc::new(MemoryGateway::new());
    let app = common::build_test_app(&gateway);
    common::login(&app).await;

    let json = body_json(get(&app, "/health").await).await;
    assert_eq!(json["admin_sessions"], 1);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(&Arc::new(MemoryGateway::new()));
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(&Arc::new(MemoryGateway::new()));
    let response = get(&app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = common::build_test_app(&Arc::new(MemoryGateway::new()));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/site-config")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");
}
