mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_list_categories_returns_catalog() {
    let app = common::test_app();

    let response = common::send(&app, "GET", "/api/categories", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 8);
    assert_eq!(categories[0]["name"], "Programação");
    assert_eq!(categories[0]["iconName"], "code-line");
}

#[tokio::test]
async fn test_popular_categories_default_limit() {
    let app = common::test_app();

    let response = common::send(&app, "GET", "/api/categories/popular", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_popular_categories_respects_limit_in_creation_order() {
    let app = common::test_app();

    let response =
        common::send(&app, "GET", "/api/categories/popular?limit=3", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Programação", "Idiomas", "Música"]);
}

#[tokio::test]
async fn test_get_category_by_id() {
    let app = common::test_app();

    let response = common::send(&app, "GET", "/api/categories/2", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["name"], "Idiomas");
}

#[tokio::test]
async fn test_get_missing_category_is_404() {
    let app = common::test_app();

    let response = common::send(&app, "GET", "/api/categories/999", None, None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
