use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Whether an account is here to learn, to teach, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_type", rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Learn,
    Teach,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub username: String,
    /// Opaque credential. The auth layer hands storage an Argon2 hash.
    #[serde(skip_serializing)]
    pub password: String,
    pub user_type: UserType,
}

/// Insert shape for registration. Accounts are immutable afterwards.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub password: String,
    pub user_type: UserType,
}
