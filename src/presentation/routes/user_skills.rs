use crate::infrastructure::state::AppState;
use crate::presentation::handlers::user_skills;
use axum::{
    Router,
    routing::{get, patch},
};

/// Caller-scoped skill declarations. Every route requires a session.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(user_skills::list_user_skills).post(user_skills::add_user_skill),
        )
        .route(
            "/{skill_id}",
            patch(user_skills::update_user_skill).delete(user_skills::remove_user_skill),
        )
}
