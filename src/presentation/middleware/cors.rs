use axum::http::HeaderValue;
use std::env;
use tower_http::cors::{Any, CorsLayer};

/// CORS policy from `CORS_ALLOWED_ORIGINS` (comma separated). Empty or
/// `*` opens the API up, which suits the bundled SPA dev setup.
pub fn cors_layer() -> CorsLayer {
    let allowed_origins = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    if allowed_origins.is_empty() || allowed_origins == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| match s.trim().parse() {
            Ok(origin) => Some(origin),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", s, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
