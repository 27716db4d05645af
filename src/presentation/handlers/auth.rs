use crate::application::auth::login::{LoginRequest, LoginUseCase};
use crate::application::auth::register::{RegisterRequest, RegisterUseCase};
use crate::domain::users::User;
use crate::infrastructure::state::{AppState, session_ttl};
use crate::presentation::extractors::CurrentUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Session handed to the client after register/login.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

async fn open_session(state: &AppState, user: User) -> Result<AuthResponse, AppError> {
    let ttl = session_ttl();
    let token = state
        .storage
        .sessions()
        .create(user.id, ttl)
        .await
        .map_err(AppError::Internal)?;

    Ok(AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: ttl.whole_seconds(),
        user,
    })
}

/// Register handler. The new account is logged in right away.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created and logged in", body = AuthResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = RegisterUseCase::new(state.storage.clone(), state.password.clone());
    let user = use_case.execute(req).await?;

    tracing::info!(user_id = user.id, "account registered");

    let response = open_session(&state, user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login handler.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = LoginUseCase::new(state.storage.clone(), state.password.clone());
    let user = use_case.execute(req).await?;

    let response = open_session(&state, user).await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Logout handler: revokes the presented session token.
#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    state
        .storage
        .sessions()
        .revoke(&current.token)
        .await
        .map_err(AppError::Internal)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Current-user handler.
#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "The authenticated user", body = User),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn current_user(current: CurrentUser) -> impl IntoResponse {
    Json(current.user)
}
