use crate::domain::connections::{
    Connection, ConnectionRole, ConnectionStatus, ConnectionWithUser, NewConnection,
};
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::CurrentUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ConnectionsQuery {
    /// "teacher" to list connections where the caller teaches; anything
    /// else (or nothing) lists the student side.
    pub role: Option<String>,
}

/// Proposal body: exactly one side is given, the caller fills the other.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProposeConnectionRequest {
    pub teacher_id: Option<i32>,
    pub student_id: Option<i32>,
    pub message: Option<String>,
}

/// Decision body. Kept as free text so anything outside
/// accepted/rejected can be answered with a 400 rather than a
/// deserialization failure.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(example = "accepted")]
    pub status: String,
}

/// List the caller's connections on one side, joined with the counterpart.
#[utoipa::path(
    get,
    path = "/api/connections",
    params(ConnectionsQuery),
    responses(
        (status = 200, description = "Connections with the counterpart user", body = [ConnectionWithUser]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "connections"
)]
pub async fn list_connections(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<ConnectionsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let role = match query.role.as_deref() {
        Some("teacher") => ConnectionRole::Teacher,
        _ => ConnectionRole::Student,
    };

    let connections = state
        .storage
        .get_connections(current.user.id, role)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(connections))
}

/// Propose a connection. Supplying `teacherId` makes the caller the
/// student; supplying `studentId` makes the caller the teacher.
#[utoipa::path(
    post,
    path = "/api/connections",
    request_body = ProposeConnectionRequest,
    responses(
        (status = 201, description = "Connection proposed", body = Connection),
        (status = 400, description = "Missing or ambiguous counterpart id", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "connections"
)]
pub async fn create_connection(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedJson(req): ValidatedJson<ProposeConnectionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_connection = match (req.teacher_id, req.student_id) {
        (Some(teacher_id), None) => NewConnection {
            teacher_id,
            student_id: current.user.id,
            message: req.message,
        },
        (None, Some(student_id)) => NewConnection {
            teacher_id: current.user.id,
            student_id,
            message: req.message,
        },
        _ => {
            return Err(AppError::BadRequest(
                "Exactly one of teacherId or studentId must be provided".to_string(),
            ));
        }
    };

    let connection = state
        .storage
        .create_connection(new_connection)
        .await
        .map_err(AppError::Internal)?;

    tracing::info!(
        connection_id = connection.id,
        teacher_id = connection.teacher_id,
        student_id = connection.student_id,
        "connection proposed"
    );

    Ok((StatusCode::CREATED, Json(connection)))
}

/// Accept or reject a pending connection. Only a party may decide.
#[utoipa::path(
    patch,
    path = "/api/connections/{id}/status",
    params(("id" = i32, Path, description = "Connection id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated connection", body = Connection),
        (status = 400, description = "Status must be 'accepted' or 'rejected'", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not a party", body = ErrorResponse),
        (status = 404, description = "Connection not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "connections"
)]
pub async fn update_connection_status(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = match req.status.as_str() {
        "accepted" => ConnectionStatus::Accepted,
        "rejected" => ConnectionStatus::Rejected,
        _ => {
            return Err(AppError::BadRequest(
                "Status must be 'accepted' or 'rejected'".to_string(),
            ));
        }
    };

    let connection = state
        .storage
        .get_connection(id)
        .await
        .map_err(AppError::Internal)?
        .ok_or(AppError::NotFound("Connection"))?;

    if connection.teacher_id != current.user.id && connection.student_id != current.user.id {
        return Err(AppError::Forbidden(
            "Not authorized to update this connection".to_string(),
        ));
    }

    let updated = state
        .storage
        .update_connection_status(id, status)
        .await
        .map_err(AppError::Internal)?
        .ok_or(AppError::NotFound("Connection"))?;

    Ok(Json(updated))
}
