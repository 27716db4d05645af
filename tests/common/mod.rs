use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use conectidade::infrastructure::memory::MemStorage;
use conectidade::infrastructure::password::PasswordService;
use conectidade::infrastructure::state::AppState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

/// Fresh application over an isolated in-memory store. Tests never share
/// state, so there is nothing to clean up between them.
pub fn test_app() -> Router {
    let state = AppState::new(
        Arc::new(MemStorage::new()),
        Arc::new(PasswordService::new()),
    );
    conectidade::presentation::router::app(state)
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// One-shot request helper; `token` adds a bearer Authorization header.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().uri(uri).method(method);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Register an account and hand back `(user, token)`.
#[allow(dead_code)]
pub async fn register(app: &Router, name: &str, username: &str, user_type: &str) -> (Value, String) {
    let response = send(
        app,
        "POST",
        "/api/register",
        None,
        Some(json!({
            "name": name,
            "username": username,
            "password": "senha123",
            "userType": user_type,
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();
    (body["user"].clone(), token)
}
