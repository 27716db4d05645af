use crate::domain::skills::Skill;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "skill_level", rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// A user's declared relationship to a skill, keyed by
/// `(user_id, skill_id)`. At most one row exists per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSkill {
    pub user_id: i32,
    pub skill_id: i32,
    pub is_teaching: bool,
    pub is_learning: bool,
    pub level: SkillLevel,
}

#[derive(Debug, Clone)]
pub struct NewUserSkill {
    pub user_id: i32,
    pub skill_id: i32,
    pub is_teaching: bool,
    pub is_learning: bool,
    pub level: SkillLevel,
}

/// Partial update applied to an existing row.
#[derive(Debug, Clone, Default)]
pub struct UserSkillUpdate {
    pub is_teaching: Option<bool>,
    pub is_learning: Option<bool>,
    pub level: Option<SkillLevel>,
}

/// Read-side join of a user skill with its skill record.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillWithSkill {
    #[serde(flatten)]
    pub user_skill: UserSkill,
    pub skill: Skill,
}
