use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{TokenKind, TokenService};
use crate::domain::user::use_cases::refresh::{RefreshTokenParams, RefreshTokenUseCase};

pub struct RefreshTokenUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshTokenUseCase for RefreshTokenUseCaseImpl {
    async fn execute(&self, params: RefreshTokenParams) -> Result<String, UserError> {
        let claimed = self
            .tokens
            .verify(&params.refresh_token, TokenKind::Refresh)?;

        // The staff flag may have changed since the refresh token was issued.
        let user = self
            .repository
            .get_by_id(&claimed.user_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    UserError::InvalidToken
                } else {
                    e.into()
                }
            })?;

        let access = self.tokens.issue(&user.principal(), TokenKind::Access)?;
        self.logger
            .info(&format!("Access token refreshed for user {}", user.id));
        Ok(access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::permissions::Principal;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::User;
    use crate::test_utils::{mock_logger, MockTokens, MockUserRepo};
    use chrono::Utc;

    #[tokio::test]
    async fn should_issue_access_token_with_current_staff_flag() {
        let user_id = UserId::generate();

        let mut tokens = MockTokens::new();
        tokens
            .expect_verify()
            .withf(|_, kind| *kind == TokenKind::Refresh)
            .returning(move |_, _| Ok(Principal::customer(user_id)));
        tokens
            .expect_issue()
            .withf(|principal, kind| principal.is_staff && *kind == TokenKind::Access)
            .returning(|_, _| Ok("new-access".to_string()));

        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_by_id().returning(move |id| {
            Ok(User::from_repository(
                *id,
                "admin".to_string(),
                "admin@example.com".to_string(),
                "Ada".to_string(),
                "Admin".to_string(),
                "hash".to_string(),
                true,
                Utc::now(),
            ))
        });

        let use_case = RefreshTokenUseCaseImpl {
            repository: Arc::new(mock_repo),
            tokens: Arc::new(tokens),
            logger: mock_logger(),
        };

        let access = use_case
            .execute(RefreshTokenParams {
                refresh_token: "refresh".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(access, "new-access");
    }

    #[tokio::test]
    async fn should_reject_token_of_deleted_user() {
        let mut tokens = MockTokens::new();
        tokens
            .expect_verify()
            .returning(|_, _| Ok(Principal::customer(UserId::generate())));

        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = RefreshTokenUseCaseImpl {
            repository: Arc::new(mock_repo),
            tokens: Arc::new(tokens),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RefreshTokenParams {
                refresh_token: "refresh".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidToken));
    }

    #[tokio::test]
    async fn should_propagate_invalid_token() {
        let mut tokens = MockTokens::new();
        tokens
            .expect_verify()
            .returning(|_, _| Err(UserError::InvalidToken));

        let use_case = RefreshTokenUseCaseImpl {
            repository: Arc::new(MockUserRepo::new()),
            tokens: Arc::new(tokens),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RefreshTokenParams {
                refresh_token: "garbage".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidToken));
    }
}
