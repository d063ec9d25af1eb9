//! Integration tests for student record endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use student_records_shared::Student;

async fn create(app: &common::TestApp, token: &str, body: Value) -> (StatusCode, String) {
    app.post("/api/students", &body.to_string(), Some(token)).await
}

#[tokio::test]
async fn test_full_crud_flow() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    // Create
    let (status, body) = create(
        &app,
        &token,
        json!({ "id": 1, "name": "Bob", "email": "b@x.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Student = serde_json::from_str(&body).unwrap();
    assert!(created.enrolled);

    // Read
    let (status, body) = app.get("/api/students/1", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Student = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched, created);

    // Update
    let (status, body) = app
        .put(
            "/api/students/1",
            &json!({ "name": "Bobby", "email": "bobby@x.com", "age": 22 }).to_string(),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Student = serde_json::from_str(&body).unwrap();
    assert_eq!(updated.name, "Bobby");
    assert_eq!(updated.age, Some(22));

    // List
    let (status, body) = app.get("/api/students", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let all: Vec<Student> = serde_json::from_str(&body).unwrap();
    assert_eq!(all, vec![updated]);

    // Delete
    let (status, _) = app.delete("/api/students/1", Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get("/api/students/1", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_nonexistent_does_not_create() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (status, _) = app
        .put(
            "/api/students/42",
            &json!({ "name": "Nobody", "email": "n@x.com" }).to_string(),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get("/api/students", Some(&token)).await;
    let all: Vec<Student> = serde_json::from_str(&body).unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_unauthenticated_crud_rejected() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/students", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post(
            "/api/students",
            &json!({ "id": 1, "name": "Bob", "email": "b@x.com" }).to_string(),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.delete("/api/students/1", Some("not-a-token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_numeric_id_rejected() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (status, body) = app.get("/api/students/abc", Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"]["code"], "MALFORMED_REQUEST");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_full_crud_flow_postgres() {
    let app = common::TestApp::postgres().await;
    app.cleanup().await;
    let token = app.login().await;

    let (status, _) = create(
        &app,
        &token,
        json!({ "id": 1, "name": "Bob", "email": "b@x.com", "phoneNumber": "555-0100" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = create(
        &app,
        &token,
        json!({ "id": 2, "name": "Rob", "email": "b@x.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT, "{}", body);

    let (status, body) = app.get("/api/students/1", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Student = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched.phone_number.as_deref(), Some("555-0100"));
    assert!(fetched.enrolled);

    let (status, _) = app
        .put(
            "/api/students/99",
            &json!({ "name": "Ghost", "email": "g@x.com" }).to_string(),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.cleanup().await;
}
