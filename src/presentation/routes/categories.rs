use crate::infrastructure::state::AppState;
use crate::presentation::handlers::categories;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_categories))
        .route("/popular", get(categories::popular_categories))
        .route("/{id}", get(categories::get_category))
}
