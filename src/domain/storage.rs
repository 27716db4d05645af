use crate::domain::categories::{Category, NewCategory};
use crate::domain::connections::{
    Connection, ConnectionRole, ConnectionStatus, ConnectionWithUser, NewConnection,
};
use crate::domain::sessions::SessionStore;
use crate::domain::skills::{NewSkill, Skill};
use crate::domain::user_skills::{NewUserSkill, UserSkill, UserSkillUpdate, UserSkillWithSkill};
use crate::domain::users::{NewUser, User};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The single contract through which all entity access occurs.
///
/// Absence is a normal value (`Ok(None)`), never an error; route handlers
/// translate it into 404. The shipped implementation is
/// [`crate::infrastructure::memory::MemStorage`]; a durable backend can
/// replace it without touching callers.
#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn get_user(&self, id: i32) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    /// Fails if the username is already taken.
    async fn create_user(&self, new_user: NewUser) -> Result<User>;

    // Skills
    async fn get_skill(&self, id: i32) -> Result<Option<Skill>>;
    async fn get_skills(&self) -> Result<Vec<Skill>>;
    async fn get_skills_by_category(&self, category: &str) -> Result<Vec<Skill>>;
    async fn create_skill(&self, new_skill: NewSkill) -> Result<Skill>;

    // User skills
    /// Inner join with Skill; rows whose skill no longer exists are skipped.
    async fn get_user_skills(&self, user_id: i32) -> Result<Vec<UserSkillWithSkill>>;
    /// Upsert keyed by `(user_id, skill_id)`; re-adding overwrites.
    async fn add_user_skill(&self, new: NewUserSkill) -> Result<UserSkill>;
    async fn update_user_skill(
        &self,
        user_id: i32,
        skill_id: i32,
        update: UserSkillUpdate,
    ) -> Result<Option<UserSkill>>;
    /// Idempotent; removing an absent pair is not an error.
    async fn remove_user_skill(&self, user_id: i32, skill_id: i32) -> Result<()>;

    // Connections
    async fn get_connection(&self, id: i32) -> Result<Option<Connection>>;
    /// Connections where `user_id` appears on the `role` side, each joined
    /// with the counterpart user.
    async fn get_connections(
        &self,
        user_id: i32,
        role: ConnectionRole,
    ) -> Result<Vec<ConnectionWithUser>>;
    /// Always starts `pending` with `created_at = now`.
    async fn create_connection(&self, new: NewConnection) -> Result<Connection>;
    /// The route layer must have authorized the caller as a party to the
    /// connection before calling this.
    async fn update_connection_status(
        &self,
        id: i32,
        status: ConnectionStatus,
    ) -> Result<Option<Connection>>;

    // Categories
    async fn get_categories(&self) -> Result<Vec<Category>>;
    /// First `limit` categories in insertion order. Not a popularity
    /// ranking; the product never defined one.
    async fn get_popular_categories(&self, limit: usize) -> Result<Vec<Category>>;
    async fn get_category(&self, id: i32) -> Result<Option<Category>>;
    async fn create_category(&self, new: NewCategory) -> Result<Category>;

    /// Session store handle for the authentication layer.
    fn sessions(&self) -> Arc<dyn SessionStore>;
}
