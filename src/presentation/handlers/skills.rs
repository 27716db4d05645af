use crate::domain::skills::Skill;
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
pub struct SkillsQuery {
    /// Restrict results to one free-text category.
    pub category: Option<String>,
}

/// List skills, optionally filtered by category.
#[utoipa::path(
    get,
    path = "/api/skills",
    params(SkillsQuery),
    responses((status = 200, description = "Skills", body = [Skill])),
    tag = "skills"
)]
pub async fn list_skills(
    State(state): State<AppState>,
    Query(query): Query<SkillsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let skills = match query.category {
        Some(category) => state.storage.get_skills_by_category(&category).await,
        None => state.storage.get_skills().await,
    }
    .map_err(AppError::Internal)?;

    Ok(Json(skills))
}

/// Fetch one skill.
#[utoipa::path(
    get,
    path = "/api/skills/{id}",
    params(("id" = i32, Path, description = "Skill id")),
    responses(
        (status = 200, description = "The skill", body = Skill),
        (status = 404, description = "Skill not found", body = ErrorResponse)
    ),
    tag = "skills"
)]
pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let skill = state
        .storage
        .get_skill(id)
        .await
        .map_err(AppError::Internal)?
        .ok_or(AppError::NotFound("Skill"))?;

    Ok(Json(skill))
}
