//! Integration tests for health, API document, config, and routing.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health_connected() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"status": "ok", "db": "connected"}));
}

#[tokio::test]
async fn test_health_reports_database_error() {
    let app = helpers::TestApp::build(|config| {
        config.database.url = Some("sqlite:///nonexistent-dir/scanbench.db?mode=ro".to_string());
    })
    .await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["status"], "error");
    assert!(response.body.get("db").is_none());
    let db_error = response.body["db_error"].as_str().expect("db_error");
    assert!(!db_error.is_empty());
}

#[tokio::test]
async fn test_other_routes_hide_database_errors() {
    let app = helpers::TestApp::build(|config| {
        config.database.url = Some("sqlite:///nonexistent-dir/scanbench.db?mode=ro".to_string());
    })
    .await;

    let response = app.request("GET", "/users/1", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({"message": "Internal server error"}));
}

#[tokio::test]
async fn test_openapi_document_served_as_yaml() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/yaml"));
    assert_eq!(response.text, helpers::OPENAPI_DOC);
}

#[tokio::test]
async fn test_openapi_document_missing() {
    let app = helpers::TestApp::build(|config| {
        config.storage.openapi_path = "/nonexistent-dir/openapi.yaml".to_string();
    })
    .await;

    let response = app.request("GET", "/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({"message": "Not found"}));
}

#[tokio::test]
async fn test_config_exposes_only_public_fields() {
    let app = helpers::TestApp::build(|config| {
        config.database.host = "db.internal".to_string();
        config.database.name = "bench".to_string();
        config.database.user = "scanner-user".to_string();
        config.database.password = "s3cr3t-pass".to_string();
        config.app.env = "staging".to_string();
    })
    .await;

    let response = app.request("GET", "/config", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"db_host": "db.internal", "db_name": "bench", "app_env": "staging"})
    );
    assert!(!response.text.contains("scanner-user"));
    assert!(!response.text.contains("s3cr3t-pass"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/admin", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({"message": "Not found"}));
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/login", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
