use crate::presentation::handlers;
use crate::presentation::middleware;
use crate::presentation::openapi::ApiDoc;
use crate::presentation::routes;
use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::infrastructure::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(handlers::health::health_check))
        .nest("/api", routes::auth::routes())
        .nest("/api/categories", routes::categories::routes())
        .nest("/api/skills", routes::skills::routes())
        .nest("/api/user-skills", routes::user_skills::routes())
        .nest("/api/connections", routes::connections::routes())
        .layer(middleware::cors::cors_layer())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
