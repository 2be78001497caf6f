//! Integration tests for file upload.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn test_upload_allowed_file() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("file", Some("notes.txt"), b"hello scanner").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "File uploaded");

    let path = response.body["path"].as_str().expect("path");
    let expected = app.upload_dir().join("notes.txt");
    assert_eq!(path, expected.display().to_string());
    assert_eq!(std::fs::read(&expected).expect("read"), b"hello scanner");
}

#[tokio::test]
async fn test_upload_rejects_disallowed_extension() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("file", Some("payload.exe"), b"MZ").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"message": "File type not allowed"}));
    assert!(!app.upload_dir().join("payload.exe").exists());
}

#[tokio::test]
async fn test_upload_extension_checked_on_original_name() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("file", Some("report.TXT.exe"), b"x").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.upload("file", Some("Report.CSV"), b"a,b").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.upload_dir().join("Report.CSV").exists());
}

#[tokio::test]
async fn test_upload_flattens_traversal_names() {
    let app = helpers::TestApp::new().await;

    let response = app
        .upload("file", Some("../../etc/passwd.txt"), b"root:x:0:0")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let path = response.body["path"].as_str().expect("path");
    let file_name = path.rsplit('/').next().expect("file name");
    assert_eq!(file_name, "etc_passwd.txt");
    assert!(!file_name.contains(".."));

    assert!(app.upload_dir().join("etc_passwd.txt").exists());
    assert!(!app.workdir.path().join("etc").exists());
}

#[tokio::test]
async fn test_upload_overwrites_same_sanitized_name() {
    let app = helpers::TestApp::new().await;

    let first = app.upload("file", Some("data.json"), b"{\"v\":1}").await;
    let second = app.upload("file", Some("./data.json"), b"{\"v\":2}").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body["path"], second.body["path"]);
    assert_eq!(
        std::fs::read(app.upload_dir().join("data.json")).expect("read"),
        b"{\"v\":2}"
    );
}

#[tokio::test]
async fn test_upload_missing_file_part() {
    let app = helpers::TestApp::new().await;

    let wrong_field = app.upload("document", Some("notes.txt"), b"x").await;
    assert_eq!(wrong_field.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_field.body, json!({"message": "No file part"}));

    let plain_value = app.upload("file", None, b"not a file").await;
    assert_eq!(plain_value.status, StatusCode::BAD_REQUEST);
    assert_eq!(plain_value.body, json!({"message": "No file part"}));

    let not_multipart = app
        .request("POST", "/upload", Some(json!({"file": "notes.txt"})))
        .await;
    assert_eq!(not_multipart.status, StatusCode::BAD_REQUEST);
    assert_eq!(not_multipart.body, json!({"message": "No file part"}));
}

#[tokio::test]
async fn test_upload_empty_filename() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("file", Some(""), b"x").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"message": "No selected file"}));
}

#[tokio::test]
async fn test_upload_name_reduced_to_extension() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("file", Some("../.txt"), b"x").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.upload_dir().join("txt").exists());

    let response = app.upload("file", Some("$$$.log"), b"x").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.upload_dir().join("log").exists());
}

#[tokio::test]
async fn test_upload_name_that_sanitizes_to_nothing() {
    let app = helpers::TestApp::build(|config| {
        config.storage.allowed_extensions = vec!["_".to_string()];
    })
    .await;

    let response = app.upload("file", Some("._"), b"x").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"message": "Invalid filename"}));
}

#[tokio::test]
async fn test_upload_body_limit() {
    let app = helpers::TestApp::build(|config| {
        config.server.request_body_limit_bytes = 1024;
    })
    .await;

    let response = app.upload("file", Some("big.log"), &vec![b'a'; 8 * 1024]).await;

    assert!(response.status.is_client_error());
    assert!(!app.upload_dir().join("big.log").exists());
}

#[tokio::test]
async fn test_upload_ignores_extra_fields() {
    let app = helpers::TestApp::new().await;
    let boundary = "b0undary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"comment\"\r\n\r\n\
         hello\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"server.log\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         line 1\r\n\
         --{boundary}--\r\n"
    );

    let req = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .expect("request");

    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        std::fs::read(app.upload_dir().join("server.log")).expect("read"),
        b"line 1"
    );
}
