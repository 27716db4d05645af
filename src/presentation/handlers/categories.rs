use crate::domain::categories::Category;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PopularQuery {
    /// Maximum number of categories to return.
    pub limit: Option<usize>,
}

/// List all categories.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "All categories", body = [Category])),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state
        .storage
        .get_categories()
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(categories))
}

/// First N categories in catalog order.
#[utoipa::path(
    get,
    path = "/api/categories/popular",
    params(PopularQuery),
    responses((status = 200, description = "Popular categories", body = [Category])),
    tag = "categories"
)]
pub async fn popular_categories(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state
        .storage
        .get_popular_categories(query.limit.unwrap_or(5))
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(categories))
}

/// Fetch one category.
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = Category),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = state
        .storage
        .get_category(id)
        .await
        .map_err(AppError::Internal)?
        .ok_or(AppError::NotFound("Category"))?;

    Ok(Json(category))
}
