use crate::application::auth::login::LoginRequest;
use crate::application::auth::register::RegisterRequest;
use crate::domain::categories::Category;
use crate::domain::connections::{Connection, ConnectionStatus, ConnectionWithUser};
use crate::domain::skills::Skill;
use crate::domain::user_skills::{SkillLevel, UserSkill, UserSkillWithSkill};
use crate::domain::users::{User, UserType};
use crate::presentation::handlers::auth::AuthResponse;
use crate::presentation::handlers::connections::{ProposeConnectionRequest, UpdateStatusRequest};
use crate::presentation::handlers::user_skills::{AddUserSkillRequest, UpdateUserSkillRequest};
use crate::shared::error::{ApiError, ErrorResponse, FieldError};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Conectidade API",
        version = "0.1.0",
        description = "REST backend matching people who want to teach skills with people who want to learn them."
    ),
    paths(
        crate::presentation::handlers::auth::register,
        crate::presentation::handlers::auth::login,
        crate::presentation::handlers::auth::logout,
        crate::presentation::handlers::auth::current_user,
        crate::presentation::handlers::categories::list_categories,
        crate::presentation::handlers::categories::popular_categories,
        crate::presentation::handlers::categories::get_category,
        crate::presentation::handlers::skills::list_skills,
        crate::presentation::handlers::skills::get_skill,
        crate::presentation::handlers::user_skills::list_user_skills,
        crate::presentation::handlers::user_skills::add_user_skill,
        crate::presentation::handlers::user_skills::update_user_skill,
        crate::presentation::handlers::user_skills::remove_user_skill,
        crate::presentation::handlers::connections::list_connections,
        crate::presentation::handlers::connections::create_connection,
        crate::presentation::handlers::connections::update_connection_status,
    ),
    components(
        schemas(
            User,
            UserType,
            Skill,
            SkillLevel,
            UserSkill,
            UserSkillWithSkill,
            Connection,
            ConnectionStatus,
            ConnectionWithUser,
            Category,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            AddUserSkillRequest,
            UpdateUserSkillRequest,
            ProposeConnectionRequest,
            UpdateStatusRequest,
            ErrorResponse,
            ApiError,
            FieldError,
        )
    ),
    tags(
        (name = "auth", description = "Registration and session management"),
        (name = "categories", description = "Subject-matter categories for discovery"),
        (name = "skills", description = "Teachable skills catalog"),
        (name = "user-skills", description = "The caller's declared skills"),
        (name = "connections", description = "Teacher-student connection requests")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build(),
                ),
            )
        }
    }
}
