//! Integration tests for login and password change.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_login_success_omits_password() {
    let app = helpers::TestApp::new().await;
    let id = app.create_test_user("testuser", "password123").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({"username": "testuser", "password": "password123"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Login success");
    assert_eq!(
        response.body["user"],
        json!({"id": id, "username": "testuser", "email": "testuser@test.com"})
    );
    assert!(!response.text.contains("password"));
    assert!(!response.text.contains("$argon2"));
}

#[tokio::test]
async fn test_login_accepts_form_encoding() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("formuser", "p@ss word").await;

    let response = app
        .request_form("/login", "username=formuser&password=p%40ss+word")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], "formuser");
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_look_identical() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("testuser2", "password123").await;

    let wrong_password = app
        .request(
            "POST",
            "/login",
            Some(json!({"username": "testuser2", "password": "wrongpassword"})),
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/login",
            Some(json!({"username": "nobody", "password": "password123"})),
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, json!({"message": "Invalid credentials"}));
    assert_eq!(wrong_password.text, unknown_user.text);
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = helpers::TestApp::new().await;

    for body in [
        json!({}),
        json!({"username": "admin"}),
        json!({"password": "x"}),
        json!({"username": "", "password": "x"}),
    ] {
        let response = app.request("POST", "/login", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            json!({"message": "username & password required"})
        );
    }

    let response = app.request("POST", "/login", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_plaintext_stored_password_is_rejected() {
    let app = helpers::TestApp::new().await;
    app.user_repo
        .create("legacy", "admin123", None)
        .await
        .expect("insert");

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({"username": "legacy", "password": "admin123"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_change_password_rotates_credentials() {
    let app = helpers::TestApp::new().await;
    let id = app.create_test_user("rotator", "old-password").await;

    let response = app
        .request(
            "POST",
            "/change_password",
            Some(json!({"user_id": id, "new_password": "new-password"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"message": "Password changed successfully"})
    );

    let stored = app.stored_password("rotator").await;
    assert!(stored.starts_with("$argon2id$"));
    assert_ne!(stored, "new-password");

    let new_login = app
        .request(
            "POST",
            "/login",
            Some(json!({"username": "rotator", "password": "new-password"})),
        )
        .await;
    assert_eq!(new_login.status, StatusCode::OK);

    let old_login = app
        .request(
            "POST",
            "/login",
            Some(json!({"username": "rotator", "password": "old-password"})),
        )
        .await;
    assert_eq!(old_login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_change_password_for_unknown_user_still_succeeds() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/change_password",
            Some(json!({"user_id": 999_999, "new_password": "whatever"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"message": "Password changed successfully"})
    );
}

#[tokio::test]
async fn test_change_password_via_form_with_string_id() {
    let app = helpers::TestApp::new().await;
    let id = app.create_test_user("formrot", "before").await;

    let response = app
        .request_form("/change_password", &format!("user_id={id}&new_password=after"))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let login = app
        .request(
            "POST",
            "/login",
            Some(json!({"username": "formrot", "password": "after"})),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_validation() {
    let app = helpers::TestApp::new().await;

    for body in [
        json!({"new_password": "x"}),
        json!({"user_id": 0, "new_password": "x"}),
        json!({"user_id": 1}),
        json!({"user_id": 1, "new_password": ""}),
        json!({"user_id": "not-a-number", "new_password": "x"}),
    ] {
        let response = app.request("POST", "/change_password", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            json!({"message": "user_id & new_password required"})
        );
    }
}
