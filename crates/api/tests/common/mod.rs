#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use nemitzam_db::MemoryGateway;
use serde_json::Value;
use tower::ServiceExt;

use nemitzam_api::config::ServerConfig;
use nemitzam_api::router::build_app_router;
use nemitzam_api::state::AppState;

pub const TEST_PASSWORD: &str = "laser-test";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        admin_password: TEST_PASSWORD.to_string(),
        database_url: None,
    }
}

/// State wired around `gateway`, for tests that need to reach the bus.
pub fn test_state(gateway: &Arc<MemoryGateway>) -> AppState {
    AppState::new(
        Arc::clone(gateway) as Arc<dyn nemitzam_db::Gateway>,
        test_config(),
    )
}

/// The full application router over `gateway`, with the production
/// middleware stack.
pub fn build_test_app(gateway: &Arc<MemoryGateway>) -> Router {
    build_app_router(test_state(gateway), &test_config())
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in with the test password and return the session token.
pub async fn login(app: &Router) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/v1/admin/session",
        None,
        Some(serde_json::json!({ "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["token"].as_str().unwrap().to_string()
}
