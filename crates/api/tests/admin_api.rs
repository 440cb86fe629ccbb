//! Integration tests for the admin API: session gate, content CRUD and
//! the site config save/broadcast path.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{body_json, login, send};
use nemitzam_api::router::build_app_router;
use nemitzam_core::drafts::{CategoryDraft, ProjectDraft};
use nemitzam_db::MemoryGateway;
use nemitzam_events::SiteEvent;
use nemitzam_studio::prompt::WRONG_PASSWORD;
use serde_json::json;

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrong_password_is_rejected() {
    let app = common::build_test_app(&Arc::new(MemoryGateway::new()));
    let response = send(
        &app,
        Method::POST,
        "/api/v1/admin/session",
        None,
        Some(json!({ "password": "12345678" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], WRONG_PASSWORD);
    assert_eq!(WRONG_PASSWORD, "Contraseña incorrecta");
}

#[tokio::test]
async fn admin_routes_require_a_session() {
    let app = common::build_test_app(&Arc::new(MemoryGateway::new()));

    let response = send(&app, Method::GET, "/api/v1/admin/projects", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bogus = uuid_like();
    let response = send(&app, Method::GET, "/api/v1/admin/projects", Some(bogus.as_str()), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_revokes_the_token() {
    let app = common::build_test_app(&Arc::new(MemoryGateway::new()));
    let token = login(&app).await;

    let response = send(&app, Method::GET, "/api/v1/admin/categories", Some(token.as_str()), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, Method::DELETE, "/api/v1/admin/session", Some(token.as_str()), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, "/api/v1/admin/categories", Some(token.as_str()), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

fn uuid_like() -> String {
    "00000000-0000-4000-8000-000000000000".to_string()
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_create_list_delete() {
    let gateway = Arc::new(MemoryGateway::new());
    let app = common::build_test_app(&gateway);
    let token = login(&app).await;

    let response = send(
        &app,
        Method::POST,
        "/api/v1/admin/projects",
        Some(token.as_str()),
        Some(json!({
            "title": "Caja",
            "image_url": "https://img.example/caja.jpg",
            "order_index": 0
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["category"], "madera");
    let id = created["data"]["id"].as_i64().unwrap();

    let listed = body_json(
        send(&app, Method::GET, "/api/v1/admin/projects", Some(token.as_str()), None).await,
    )
    .await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["title"], "Caja");

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/admin/projects/{id}?confirm=true"),
        Some(token.as_str()),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(gateway.projects().is_empty());
}

#[tokio::test]
async fn project_missing_fields_never_reach_the_gateway() {
    let gateway = Arc::new(MemoryGateway::new());
    let app = common::build_test_app(&gateway);
    let token = login(&app).await;
    let calls = gateway.call_count();

    let response = send(
        &app,
        Method::POST,
        "/api/v1/admin/projects",
        Some(token.as_str()),
        Some(json!({ "title": "Sin imagen", "image_url": "" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(gateway.call_count(), calls);
}

#[tokio::test]
async fn delete_without_confirmation_changes_nothing() {
    let gateway = Arc::new(MemoryGateway::new());
    let row = gateway.seed_project(&ProjectDraft {
        title: "Caja".into(),
        image_url: "https://img.example/caja.jpg".into(),
        ..ProjectDraft::default()
    });
    let app = common::build_test_app(&gateway);
    let token = login(&app).await;
    let before = gateway.projects();
    let calls = gateway.call_count();

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/admin/projects/{}", row.id),
        Some(token.as_str()),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFIRMATION_REQUIRED");
    assert_eq!(gateway.call_count(), calls);
    assert_eq!(gateway.projects(), before);
}

#[tokio::test]
async fn updating_a_missing_project_is_404() {
    let app = common::build_test_app(&Arc::new(MemoryGateway::new()));
    let token = login(&app).await;

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/admin/projects/999",
        Some(token.as_str()),
        Some(json!({ "title": "X", "image_url": "https://img.example/x.jpg" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_slug_is_lowercased() {
    let gateway = Arc::new(MemoryGateway::new());
    let app = common::build_test_app(&gateway);
    let token = login(&app).await;

    let response = send(
        &app,
        Method::POST,
        "/api/v1/admin/categories",
        Some(token.as_str()),
        Some(json!({ "name": "Acrílico", "slug": "ACRILICO", "display_order": 3 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["slug"], "acrilico");
}

#[tokio::test]
async fn category_update_and_confirmed_delete() {
    let gateway = Arc::new(MemoryGateway::new());
    let row = gateway.seed_category(&CategoryDraft {
        name: "Madera".into(),
        slug: "madera".into(),
        display_order: 1,
    });
    let app = common::build_test_app(&gateway);
    let token = login(&app).await;

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/v1/admin/categories/{}", row.id),
        Some(token.as_str()),
        Some(json!({ "name": "Madera fina", "slug": "Madera-Fina", "display_order": 1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(gateway.categories()[0].slug, "madera-fina");

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/admin/categories/{}?confirm=true", row.id),
        Some(token.as_str()),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(gateway.categories().is_empty());
}

// ---------------------------------------------------------------------------
// Site config
// ---------------------------------------------------------------------------

#[tokio::test]
async fn config_save_broadcasts_to_subscribers() {
    let gateway = Arc::new(MemoryGateway::new());
    let state = common::test_state(&gateway);
    let mut events = state.event_bus.subscribe();
    let app = build_app_router(state, &common::test_config());
    let token = login(&app).await;

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/admin/site-config",
        Some(token.as_str()),
        Some(json!({ "site_name": "Nemitzam", "site_icon": "🔥" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(gateway.config_value("site_name").as_deref(), Some("Nemitzam"));

    let SiteEvent::SiteConfigUpdated { config, .. } = events.recv().await.unwrap();
    assert_eq!(config.site_name, "Nemitzam");
    assert_eq!(config.site_icon, "🔥");
}

#[tokio::test]
async fn partial_config_save_reports_applied_keys() {
    let gateway = Arc::new(MemoryGateway::new());
    gateway.fail_config_key("site_logo_url");
    let state = common::test_state(&gateway);
    let mut events = state.event_bus.subscribe();
    let app = build_app_router(state, &common::test_config());
    let token = login(&app).await;

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/admin/site-config",
        Some(token.as_str()),
        Some(json!({
            "site_name": "Nemitzam",
            "site_icon": "🔥",
            "social_email": "hola@nemitzam.mx"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PARTIAL_SAVE");
    assert_eq!(json["failed_key"], "site_logo_url");
    assert_eq!(json["applied"], json!(["site_name", "site_icon"]));

    assert_eq!(gateway.config_value("site_name").as_deref(), Some("Nemitzam"));
    assert_eq!(gateway.config_value("social_email").as_deref(), Some(""));
    assert!(events.try_recv().is_err());
}
