pub mod auth;
pub mod categories;
pub mod connections;
pub mod skills;
pub mod user_skills;
