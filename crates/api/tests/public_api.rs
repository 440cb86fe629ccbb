//! Integration tests for the public site endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get};
use nemitzam_core::drafts::ProjectDraft;
use nemitzam_db::MemoryGateway;

fn project(title: &str, category: &str, order_index: i32) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: String::new(),
        image_url: format!("https://img.example/{title}.jpg"),
        category: category.to_string(),
        order_index,
    }
}

fn seeded_gateway() -> Arc<MemoryGateway> {
    let gateway = Arc::new(MemoryGateway::new());
    gateway.seed_project(&project("Tabla", "madera", 2));
    gateway.seed_project(&project("Cartera", "cuero", 1));
    gateway.seed_project(&project("Caja", "madera", 0));
    gateway
}

#[tokio::test]
async fn site_config_defaults_when_table_is_empty() {
    let app = common::build_test_app(&Arc::new(MemoryGateway::empty()));
    let response = get(&app, "/api/v1/site-config").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["site_name"], "LaserArt");
    assert_eq!(json["data"]["site_icon"], "⚡");
    assert_eq!(json["data"]["social_email"], "");
}

#[tokio::test]
async fn site_config_ignores_unknown_keys() {
    let gateway = Arc::new(MemoryGateway::new());
    gateway.seed_config("site_name", "Nemitzam");
    gateway.seed_config("theme_color", "#ff6600");
    let app = common::build_test_app(&gateway);

    let json = body_json(get(&app, "/api/v1/site-config").await).await;
    assert_eq!(json["data"]["site_name"], "Nemitzam");
    assert!(json["data"].get("theme_color").is_none());
}

#[tokio::test]
async fn site_config_read_failure_is_a_500() {
    let gateway = Arc::new(MemoryGateway::new());
    gateway.fail_reads("offline");
    let app = common::build_test_app(&gateway);

    let response = get(&app, "/api/v1/site-config").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "GATEWAY_ERROR");
}

#[tokio::test]
async fn projects_are_listed_in_display_order() {
    let app = common::build_test_app(&seeded_gateway());
    let json = body_json(get(&app, "/api/v1/projects").await).await;

    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Caja", "Cartera", "Tabla"]);
}

#[tokio::test]
async fn projects_filter_by_category_and_limit() {
    let app = common::build_test_app(&seeded_gateway());

    let json = body_json(get(&app, "/api/v1/projects?category=madera").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json = body_json(get(&app, "/api/v1/projects?category=madera&limit=1").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Caja");

    let json = body_json(get(&app, "/api/v1/projects?category=todas").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn negative_limit_is_rejected() {
    let app = common::build_test_app(&seeded_gateway());
    let response = get(&app, "/api/v1/projects?limit=-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn filter_chips_follow_project_categories() {
    let app = common::build_test_app(&seeded_gateway());
    let json = body_json(get(&app, "/api/v1/projects/categories").await).await;

    let data = json["data"].as_array().unwrap();
    let values: Vec<&str> = data.iter().map(|f| f["value"].as_str().unwrap()).collect();
    assert_eq!(values, vec!["todas", "madera", "cuero"]);
    assert_eq!(data[0]["label"], "Todas");
}

#[tokio::test]
async fn hero_falls_back_to_placeholder() {
    let app = common::build_test_app(&Arc::new(MemoryGateway::new()));
    let json = body_json(get(&app, "/api/v1/hero").await).await;

    let slides = json["data"]["slides"].as_array().unwrap();
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0]["title"], "Proyecto Ejemplo");
    assert_eq!(json["data"]["interval_ms"], 3000);
}

#[tokio::test]
async fn hero_lists_projects_in_order() {
    let app = common::build_test_app(&seeded_gateway());
    let json = body_json(get(&app, "/api/v1/hero").await).await;

    let slides = json["data"]["slides"].as_array().unwrap();
    assert_eq!(slides.len(), 3);
    assert_eq!(slides[0]["title"], "Caja");
}
