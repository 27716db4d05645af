use crate::domain::users::User;
use crate::infrastructure::state::AppState;
use crate::shared::error::AppError;
use axum::{extract::FromRequestParts, http::header, http::request::Parts};

/// Authenticated-user extractor.
///
/// Resolves the bearer token against the session store and loads the
/// account. Any failure along the way is a 401; handlers taking this
/// parameter are authenticated by construction.
#[derive(Debug)]
pub struct CurrentUser {
    pub user: User,
    pub token: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let user_id = state
            .storage
            .sessions()
            .resolve(token)
            .await
            .map_err(AppError::Internal)?
            .ok_or(AppError::Unauthorized)?;

        let user = state
            .storage
            .get_user(user_id)
            .await
            .map_err(AppError::Internal)?
            .ok_or(AppError::Unauthorized)?;

        Ok(CurrentUser {
            user,
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::Storage;
    use crate::domain::users::{NewUser, UserType};
    use crate::infrastructure::memory::MemStorage;
    use crate::infrastructure::password::PasswordService;
    use axum::http::Request;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(Arc::new(MemStorage::new()), Arc::new(PasswordService::new()))
    }

    async fn parts_with_auth(header_value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header_value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_auth(None).await;

        let result = CurrentUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_auth(Some("Basic abc")).await;

        let result = CurrentUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
    }

    #[tokio::test]
    async fn stale_token_is_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_auth(Some("Bearer not-a-real-token")).await;

        let result = CurrentUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
    }

    #[tokio::test]
    async fn valid_session_resolves_the_user() {
        let state = test_state();
        let user = state
            .storage
            .create_user(NewUser {
                name: "Maria".to_string(),
                username: "maria".to_string(),
                password: "hash".to_string(),
                user_type: UserType::Teach,
            })
            .await
            .unwrap();
        let token = state
            .storage
            .sessions()
            .create(user.id, time::Duration::hours(1))
            .await
            .unwrap();

        let mut parts = parts_with_auth(Some(&format!("Bearer {token}"))).await;
        let current = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert_eq!(current.user.username, "maria");
        assert_eq!(current.token, token);
    }
}
