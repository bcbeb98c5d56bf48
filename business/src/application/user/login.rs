use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, TokenKind, TokenPair, TokenService};
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<TokenPair, UserError> {
        self.logger
            .info(&format!("Login attempt for: {}", params.username));

        let user = self
            .repository
            .find_by_username(params.username.trim())
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(&params.password, &user.password_hash)? {
            self.logger
                .warn(&format!("Rejected credentials for: {}", user.username));
            return Err(UserError::InvalidCredentials);
        }

        let principal = user.principal();
        let pair = TokenPair {
            access: self.tokens.issue(&principal, TokenKind::Access)?,
            refresh: self.tokens.issue(&principal, TokenKind::Refresh)?,
        };

        self.logger.info(&format!("User {} logged in", user.id));
        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::User;
    use crate::test_utils::{mock_logger, MockHasher, MockTokens, MockUserRepo};
    use chrono::Utc;

    fn stored_user() -> User {
        User::from_repository(
            UserId::generate(),
            "jdoe".to_string(),
            "jdoe@example.com".to_string(),
            "John".to_string(),
            "Doe".to_string(),
            "stored-hash".to_string(),
            false,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_issue_access_and_refresh_tokens() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user())));

        let mut hasher = MockHasher::new();
        hasher
            .expect_verify()
            .withf(|password, hash| password == "correct-horse" && hash == "stored-hash")
            .returning(|_, _| Ok(true));

        let mut tokens = MockTokens::new();
        tokens
            .expect_issue()
            .returning(|_, kind| Ok(format!("{}-token", kind)));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: Arc::new(hasher),
            tokens: Arc::new(tokens),
            logger: mock_logger(),
        };

        let pair = use_case
            .execute(LoginParams {
                username: "jdoe".to_string(),
                password: "correct-horse".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(pair.access, "access-token");
        assert_eq!(pair.refresh, "refresh-token");
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user())));

        let mut hasher = MockHasher::new();
        hasher.expect_verify().returning(|_, _| Ok(false));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: Arc::new(hasher),
            tokens: Arc::new(MockTokens::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "jdoe".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn should_reject_unknown_username() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_username().returning(|_| Ok(None));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: Arc::new(MockHasher::new()),
            tokens: Arc::new(MockTokens::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "ghost".to_string(),
                password: "whatever-password".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }
}
