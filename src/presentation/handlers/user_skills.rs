use crate::domain::user_skills::{NewUserSkill, SkillLevel, UserSkill, UserSkillUpdate, UserSkillWithSkill};
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::CurrentUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Body for opting into a skill. The user id always comes from the
/// session, never from the payload.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddUserSkillRequest {
    #[validate(range(min = 1, message = "skillId must be a positive id"))]
    pub skill_id: i32,
    #[serde(default)]
    pub is_teaching: bool,
    #[serde(default)]
    pub is_learning: bool,
    #[serde(default)]
    pub level: SkillLevel,
}

/// Partial-update body; omitted fields keep their stored values.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserSkillRequest {
    pub is_teaching: Option<bool>,
    pub is_learning: Option<bool>,
    pub level: Option<SkillLevel>,
}

/// List the caller's skills, joined with their skill records.
#[utoipa::path(
    get,
    path = "/api/user-skills",
    responses(
        (status = 200, description = "The caller's skills", body = [UserSkillWithSkill]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "user-skills"
)]
pub async fn list_user_skills(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let user_skills = state
        .storage
        .get_user_skills(current.user.id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(user_skills))
}

/// Opt into a skill. Re-adding the same skill overwrites the old entry.
#[utoipa::path(
    post,
    path = "/api/user-skills",
    request_body = AddUserSkillRequest,
    responses(
        (status = 201, description = "Skill added", body = UserSkill),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "user-skills"
)]
pub async fn add_user_skill(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedJson(req): ValidatedJson<AddUserSkillRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .storage
        .get_skill(req.skill_id)
        .await
        .map_err(AppError::Internal)?
        .ok_or(AppError::NotFound("Skill"))?;

    let user_skill = state
        .storage
        .add_user_skill(NewUserSkill {
            user_id: current.user.id,
            skill_id: req.skill_id,
            is_teaching: req.is_teaching,
            is_learning: req.is_learning,
            level: req.level,
        })
        .await
        .map_err(AppError::Internal)?;

    Ok((StatusCode::CREATED, Json(user_skill)))
}

/// Update teaching/learning flags or level for one of the caller's skills.
#[utoipa::path(
    patch,
    path = "/api/user-skills/{skill_id}",
    params(("skill_id" = i32, Path, description = "Skill id")),
    request_body = UpdateUserSkillRequest,
    responses(
        (status = 200, description = "Updated entry", body = UserSkill),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "User skill not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "user-skills"
)]
pub async fn update_user_skill(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(skill_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateUserSkillRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_skill = state
        .storage
        .update_user_skill(
            current.user.id,
            skill_id,
            UserSkillUpdate {
                is_teaching: req.is_teaching,
                is_learning: req.is_learning,
                level: req.level,
            },
        )
        .await
        .map_err(AppError::Internal)?
        .ok_or(AppError::NotFound("User skill"))?;

    Ok(Json(user_skill))
}

/// Drop a skill. Removing one the caller never had still succeeds.
#[utoipa::path(
    delete,
    path = "/api/user-skills/{skill_id}",
    params(("skill_id" = i32, Path, description = "Skill id")),
    responses(
        (status = 204, description = "Skill removed"),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "user-skills"
)]
pub async fn remove_user_skill(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(skill_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state
        .storage
        .remove_user_skill(current.user.id, skill_id)
        .await
        .map_err(AppError::Internal)?;

    Ok(StatusCode::NO_CONTENT)
}
