//! Integration tests for user lookup and search.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_get_user_returns_exact_profile() {
    let app = helpers::TestApp::new().await;
    let id = app.create_test_user("alice", "pw").await;

    let response = app.request("GET", &format!("/users/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"id": id, "username": "alice", "email": "alice@test.com"})
    );
    assert_eq!(response.body.as_object().map(|o| o.len()), Some(3));
}

#[tokio::test]
async fn test_get_missing_user() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/users/424242", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn test_non_integer_id_is_not_routed() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "pw").await;

    for path in [
        "/users/abc",
        "/users/1.5",
        "/users/1%20OR%201=1",
        "/users/+1",
        "/users/-1",
        "/users/%2B1",
    ] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(response.body, json!({"message": "Not found"}), "{path}");
    }
}

#[tokio::test]
async fn test_search_substring_match() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "pw").await;
    app.create_test_user("sysadmin", "pw").await;
    app.create_test_user("guest", "pw").await;

    let response = app.request("GET", "/search?q=adm", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let names: Vec<&str> = response.body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .filter_map(|u| u["username"].as_str())
        .collect();
    assert_eq!(names, vec!["admin", "sysadmin"]);

    for user in response.body["results"].as_array().expect("results array") {
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn test_empty_or_missing_query_returns_everyone() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "pw").await;
    app.create_test_user("guest", "pw").await;

    for path in ["/search", "/search?q=", "/search?q=%20%20"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body["results"].as_array().map(Vec::len),
            Some(2),
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_search_repeated_q_uses_first_value() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "pw").await;
    app.create_test_user("sysadmin", "pw").await;

    let response = app.request("GET", "/search?q=adm&q=zzz", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let names: Vec<&str> = response.body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .filter_map(|u| u["username"].as_str())
        .collect();
    assert_eq!(names, vec!["admin", "sysadmin"]);
}

#[tokio::test]
async fn test_search_treats_input_as_data() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "pw").await;

    let response = app
        .request("GET", "/search?q=%27%20OR%20%271%27%3D%271", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"results": []}));
}
