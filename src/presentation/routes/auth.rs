use crate::infrastructure::state::AppState;
use crate::presentation::handlers::auth;
use axum::{
    Router,
    routing::{get, post},
};

/// Authentication surface: register, login, logout, current user.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
}
