use crate::infrastructure::state::AppState;
use crate::presentation::handlers::skills;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list_skills))
        .route("/{id}", get(skills::get_skill))
}
