use crate::domain::sessions::{Session, SessionStore};
use anyhow::Result;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Mutex;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// SHA-256 hash of a token, hex encoded. Raw tokens never touch the map.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// In-memory session store keyed by token hash. Expired rows are dropped
/// lazily on resolve and swept on create.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, user_id: i32, ttl: Duration) -> Result<String> {
        let token = Uuid::new_v4().to_string();
        let now = OffsetDateTime::now_utc();

        let key = hash_token(&token);
        let mut sessions = self.sessions.lock().unwrap();
        sessions.retain(|_, s| !s.is_expired(now));
        sessions.insert(
            key.clone(),
            Session {
                token_hash: key,
                user_id,
                expires_at: now + ttl,
            },
        );

        Ok(token)
    }

    async fn resolve(&self, token: &str) -> Result<Option<i32>> {
        let key = hash_token(token);
        let now = OffsetDateTime::now_utc();

        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get(&key) {
            Some(session) if session.is_expired(now) => {
                sessions.remove(&key);
                Ok(None)
            }
            Some(session) => Ok(Some(session.user_id)),
            None => Ok(None),
        }
    }

    async fn revoke(&self, token: &str) -> Result<()> {
        self.sessions.lock().unwrap().remove(&hash_token(token));
        Ok(())
    }
}
