use crate::domain::password::PasswordHashingService;
use crate::domain::storage::Storage;
use crate::domain::users::User;
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "maria")]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "senha123")]
    pub password: String,
}

pub struct LoginUseCase {
    storage: Arc<dyn Storage>,
    password_service: Arc<dyn PasswordHashingService>,
}

impl LoginUseCase {
    pub fn new(storage: Arc<dyn Storage>, password_service: Arc<dyn PasswordHashingService>) -> Self {
        Self {
            storage,
            password_service,
        }
    }

    /// Verify credentials and return the account. The same 401 covers an
    /// unknown username and a wrong password.
    #[tracing::instrument(skip(self, req), fields(username = %req.username))]
    pub async fn execute(&self, req: LoginRequest) -> Result<User, AppError> {
        let user = self
            .storage
            .get_user_by_username(&req.username)
            .await
            .map_err(AppError::Internal)?
            .ok_or(AppError::Unauthorized)?;

        let valid = self
            .password_service
            .verify_password(&req.password, &user.password)
            .map_err(AppError::Internal)?;

        if !valid {
            return Err(AppError::Unauthorized);
        }

        Ok(user)
    }
}
