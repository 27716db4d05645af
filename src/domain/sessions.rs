use anyhow::Result;
use async_trait::async_trait;
use time::{Duration, OffsetDateTime};

/// A login session. Only the SHA-256 hash of the token is retained.
#[derive(Debug, Clone)]
pub struct Session {
    pub token_hash: String,
    pub user_id: i32,
    pub expires_at: OffsetDateTime,
}

impl Session {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at <= now
    }
}

/// Opaque session-store handle used by the authentication layer.
/// Owned by the storage component, not by route handlers.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Mint a session for a user and return the raw bearer token.
    async fn create(&self, user_id: i32, ttl: Duration) -> Result<String>;

    /// Resolve a raw token to the user id it belongs to. Expired or
    /// unknown tokens resolve to `None`.
    async fn resolve(&self, token: &str) -> Result<Option<i32>>;

    /// Invalidate a session. Revoking an unknown token is not an error.
    async fn revoke(&self, token: &str) -> Result<()>;
}
