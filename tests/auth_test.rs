mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_creates_account_and_session() {
    let app = common::test_app();

    let response = common::send(
        &app,
        "POST",
        "/api/register",
        None,
        Some(json!({
            "name": "Maria Silva",
            "username": "maria",
            "password": "senha123",
            "userType": "teach",
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = common::body_json(response).await;
    assert_eq!(body["tokenType"], "Bearer");
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["username"], "maria");
    assert_eq!(body["user"]["userType"], "teach");
    // The credential never leaves the server.
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_register_defaults_to_learn() {
    let app = common::test_app();

    let response = common::send(
        &app,
        "POST",
        "/api/register",
        None,
        Some(json!({
            "name": "Bruno Costa",
            "username": "bruno",
            "password": "senha123",
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = common::body_json(response).await;
    assert_eq!(body["user"]["userType"], "learn");
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let app = common::test_app();
    common::register(&app, "Maria Silva", "maria", "teach").await;

    let response = common::send(
        &app,
        "POST",
        "/api/register",
        None,
        Some(json!({
            "name": "Other Maria",
            "username": "maria",
            "password": "senha456",
            "userType": "learn",
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_validation_is_itemized() {
    let app = common::test_app();

    let response = common::send(
        &app,
        "POST",
        "/api/register",
        None,
        Some(json!({
            "name": "",
            "username": "ab",
            "password": "123",
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    let sources: Vec<&str> = errors
        .iter()
        .map(|e| e["source"].as_str().unwrap())
        .collect();
    assert!(sources.contains(&"name"));
    assert!(sources.contains(&"username"));
    assert!(sources.contains(&"password"));
}

#[tokio::test]
async fn test_login_roundtrip() {
    let app = common::test_app();
    common::register(&app, "Maria Silva", "maria", "both").await;

    let response = common::send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": "maria", "password": "senha123" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let token = body["token"].as_str().unwrap();

    let me = common::send(&app, "GET", "/api/user", Some(token), None).await;
    assert_eq!(me.status(), StatusCode::OK);
    let me = common::body_json(me).await;
    assert_eq!(me["username"], "maria");
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let app = common::test_app();
    common::register(&app, "Maria Silva", "maria", "both").await;

    let response = common::send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": "maria", "password": "errada" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_requires_session() {
    let app = common::test_app();

    let response = common::send(&app, "GET", "/api/user", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = common::send(&app, "GET", "/api/user", Some("bogus-token"), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = common::test_app();
    let (_, token) = common::register(&app, "Maria Silva", "maria", "teach").await;

    let response = common::send(&app, "POST", "/api/logout", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let me = common::send(&app, "GET", "/api/user", Some(&token), None).await;
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);
}
