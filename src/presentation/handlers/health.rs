use crate::infrastructure::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Health check endpoint with a storage reachability probe.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.storage.get_categories().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "storage": "reachable"
            })),
        ),
        Err(e) => {
            tracing::error!("Storage health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "storage": "unreachable"
                })),
            )
        }
    }
}
