use crate::infrastructure::state::AppState;
use crate::presentation::handlers::connections;
use axum::{
    Router,
    routing::{get, patch},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(connections::list_connections).post(connections::create_connection),
        )
        .route("/{id}/status", patch(connections::update_connection_status))
}
