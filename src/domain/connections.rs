use crate::domain::users::User;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "connection_status", rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// Which side of a connection a user id is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionRole {
    Teacher,
    Student,
}

/// A proposed or established teacher-student relationship.
///
/// Created `pending`; moves to `accepted` or `rejected` once, by one of
/// the two parties. Never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: i32,
    pub teacher_id: i32,
    pub student_id: i32,
    pub status: ConnectionStatus,
    pub message: Option<String>,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
}

/// Insert shape. Status and creation time are assigned by storage, so a
/// proposal cannot smuggle in a pre-accepted state.
#[derive(Debug, Clone)]
pub struct NewConnection {
    pub teacher_id: i32,
    pub student_id: i32,
    pub message: Option<String>,
}

/// Read-side join of a connection with the counterpart user: the student
/// when queried as teacher, the teacher when queried as student.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionWithUser {
    #[serde(flatten)]
    pub connection: Connection,
    pub user: User,
}
