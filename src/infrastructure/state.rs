use crate::domain::password::PasswordHashingService;
use crate::domain::storage::Storage;
use std::sync::Arc;

/// Application state shared across handlers. Built once at bootstrap and
/// injected, so tests get an isolated store per instance.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub password: Arc<dyn PasswordHashingService>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, password: Arc<dyn PasswordHashingService>) -> Self {
        Self { storage, password }
    }
}

/// Session lifetime in seconds, from `SESSION_TTL_SECS` (default one day).
pub fn session_ttl() -> time::Duration {
    let secs = std::env::var("SESSION_TTL_SECS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(86_400);
    time::Duration::seconds(secs)
}
