use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A teachable skill. `category` is a free-text grouping key, not a
/// reference to [`crate::domain::categories::Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
}
