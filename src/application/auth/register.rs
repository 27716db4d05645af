use crate::domain::password::PasswordHashingService;
use crate::domain::storage::Storage;
use crate::domain::users::{NewUser, User, UserType};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Maria Silva", min_length = 1)]
    pub name: String,
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    #[schema(example = "maria", min_length = 3)]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "senha123", min_length = 6)]
    pub password: String,
    #[serde(default)]
    pub user_type: UserType,
}

pub struct RegisterUseCase {
    storage: Arc<dyn Storage>,
    password_hasher: Arc<dyn PasswordHashingService>,
}

impl RegisterUseCase {
    pub fn new(storage: Arc<dyn Storage>, password_hasher: Arc<dyn PasswordHashingService>) -> Self {
        Self {
            storage,
            password_hasher,
        }
    }

    #[tracing::instrument(skip(self, req), fields(username = %req.username))]
    pub async fn execute(&self, req: RegisterRequest) -> Result<User, AppError> {
        if self
            .storage
            .get_user_by_username(&req.username)
            .await
            .map_err(AppError::Internal)?
            .is_some()
        {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let password = self
            .password_hasher
            .hash_password(&req.password)
            .map_err(AppError::Internal)?;

        self.storage
            .create_user(NewUser {
                name: req.name,
                username: req.username,
                password,
                user_type: req.user_type,
            })
            .await
            .map_err(AppError::Internal)
    }
}
