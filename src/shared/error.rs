use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A single violated field, reported back to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    BadRequest(String),
    #[error("authentication required")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = Vec::new();
        for (field, violations) in errors.field_errors() {
            for violation in violations {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value for {field}"));
                fields.push(FieldError {
                    path: field.to_string(),
                    message,
                });
            }
        }
        AppError::Validation(fields)
    }
}

/// Error object in the response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Error response envelope shared by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<ApiError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            AppError::Validation(fields) => {
                let status = StatusCode::BAD_REQUEST;
                let errors = fields
                    .into_iter()
                    .map(|f| ApiError {
                        status: status.as_u16(),
                        detail: f.message,
                        source: Some(f.path),
                    })
                    .collect();
                (status, errors)
            }
            AppError::BadRequest(detail) => single(StatusCode::BAD_REQUEST, detail),
            AppError::Unauthorized => {
                single(StatusCode::UNAUTHORIZED, "Not authenticated".to_string())
            }
            AppError::Forbidden(detail) => single(StatusCode::FORBIDDEN, detail),
            AppError::NotFound(entity) => {
                single(StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::Conflict(detail) => single(StatusCode::CONFLICT, detail),
            AppError::Internal(e) => {
                tracing::error!("Internal server error: {:?}", e);
                single(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { errors })).into_response()
    }
}

fn single(status: StatusCode, detail: String) -> (StatusCode, Vec<ApiError>) {
    (
        status,
        vec![ApiError {
            status: status.as_u16(),
            detail,
            source: None,
        }],
    )
}
