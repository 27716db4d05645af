mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_connections_require_authentication() {
    let app = common::test_app();

    let response = common::send(&app, "GET", "/api/connections", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = common::send(
        &app,
        "POST",
        "/api/connections",
        None,
        Some(json!({ "teacherId": 1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_student_proposes_and_teacher_accepts() {
    let app = common::test_app();
    let (teacher, teacher_token) = common::register(&app, "Ana Prof", "ana", "teach").await;
    let (_, student_token) = common::register(&app, "Bruno Aluno", "bruno", "learn").await;

    // Bruno proposes to learn from Ana.
    let response = common::send(
        &app,
        "POST",
        "/api/connections",
        Some(&student_token),
        Some(json!({ "teacherId": teacher["id"], "message": "Quero aprender!" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let connection = common::body_json(response).await;
    assert_eq!(connection["status"], "pending");
    assert_eq!(connection["teacherId"], teacher["id"]);
    let connection_id = connection["id"].as_i64().unwrap();

    // Ana sees exactly one pending request from Bruno.
    let response = common::send(
        &app,
        "GET",
        "/api/connections?role=teacher",
        Some(&teacher_token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "pending");
    assert_eq!(rows[0]["user"]["username"], "bruno");
    assert_eq!(rows[0]["message"], "Quero aprender!");

    // Ana accepts.
    let response = common::send(
        &app,
        "PATCH",
        &format!("/api/connections/{connection_id}/status"),
        Some(&teacher_token),
        Some(json!({ "status": "accepted" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "accepted");

    // Re-applying the same decision changes nothing.
    let response = common::send(
        &app,
        "PATCH",
        &format!("/api/connections/{connection_id}/status"),
        Some(&teacher_token),
        Some(json!({ "status": "accepted" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Bruno sees it accepted, joined with Ana.
    let response = common::send(&app, "GET", "/api/connections", Some(&student_token), None).await;
    let body = common::body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "accepted");
    assert_eq!(rows[0]["user"]["username"], "ana");
}

#[tokio::test]
async fn test_teacher_proposes_to_student() {
    let app = common::test_app();
    let (_, teacher_token) = common::register(&app, "Ana Prof", "ana", "teach").await;
    let (student, _) = common::register(&app, "Bruno Aluno", "bruno", "learn").await;

    let response = common::send(
        &app,
        "POST",
        "/api/connections",
        Some(&teacher_token),
        Some(json!({ "studentId": student["id"] })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let connection = common::body_json(response).await;
    assert_eq!(connection["studentId"], student["id"]);
    assert_eq!(connection["status"], "pending");
}

#[tokio::test]
async fn test_create_connection_needs_exactly_one_counterpart() {
    let app = common::test_app();
    let (user, token) = common::register(&app, "Ana Prof", "ana", "both").await;

    let response = common::send(
        &app,
        "POST",
        "/api/connections",
        Some(&token),
        Some(json!({})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = common::send(
        &app,
        "POST",
        "/api/connections",
        Some(&token),
        Some(json!({ "teacherId": user["id"], "studentId": user["id"] })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_role_defaults_to_student_side() {
    let app = common::test_app();
    let (teacher, teacher_token) = common::register(&app, "Ana Prof", "ana", "teach").await;
    let (_, student_token) = common::register(&app, "Bruno Aluno", "bruno", "learn").await;

    common::send(
        &app,
        "POST",
        "/api/connections",
        Some(&student_token),
        Some(json!({ "teacherId": teacher["id"] })),
    )
    .await;

    // Bruno is the student: an unrecognized role is read as "student".
    let response = common::send(
        &app,
        "GET",
        "/api/connections?role=mentor",
        Some(&student_token),
        None,
    )
    .await;
    let body = common::body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // The teacher side stays empty for Bruno.
    let response = common::send(
        &app,
        "GET",
        "/api/connections?role=teacher",
        Some(&student_token),
        None,
    )
    .await;
    let body = common::body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_status_update_rejects_bad_values() {
    let app = common::test_app();
    let (teacher, teacher_token) = common::register(&app, "Ana Prof", "ana", "teach").await;
    let (_, student_token) = common::register(&app, "Bruno Aluno", "bruno", "learn").await;

    let response = common::send(
        &app,
        "POST",
        "/api/connections",
        Some(&student_token),
        Some(json!({ "teacherId": teacher["id"] })),
    )
    .await;
    let connection = common::body_json(response).await;
    let id = connection["id"].as_i64().unwrap();

    // Not a known status at all.
    let response = common::send(
        &app,
        "PATCH",
        &format!("/api/connections/{id}/status"),
        Some(&teacher_token),
        Some(json!({ "status": "maybe" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Pending is a valid state but not a valid decision.
    let response = common::send(
        &app,
        "PATCH",
        &format!("/api/connections/{id}/status"),
        Some(&teacher_token),
        Some(json!({ "status": "pending" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_update_by_non_party_is_forbidden() {
    let app = common::test_app();
    let (teacher, _) = common::register(&app, "Ana Prof", "ana", "teach").await;
    let (_, student_token) = common::register(&app, "Bruno Aluno", "bruno", "learn").await;
    let (_, outsider_token) = common::register(&app, "Carla Outra", "carla", "both").await;

    let response = common::send(
        &app,
        "POST",
        "/api/connections",
        Some(&student_token),
        Some(json!({ "teacherId": teacher["id"] })),
    )
    .await;
    let connection = common::body_json(response).await;
    let id = connection["id"].as_i64().unwrap();

    let response = common::send(
        &app,
        "PATCH",
        &format!("/api/connections/{id}/status"),
        Some(&outsider_token),
        Some(json!({ "status": "accepted" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_status_update_missing_connection_is_404() {
    let app = common::test_app();
    let (_, token) = common::register(&app, "Ana Prof", "ana", "teach").await;

    let response = common::send(
        &app,
        "PATCH",
        "/api/connections/999/status",
        Some(&token),
        Some(json!({ "status": "accepted" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
