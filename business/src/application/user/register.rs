use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{validate_password, NewUserProps, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Registering user: {}", params.username));

        validate_password(&params.password, &params.password_confirmation)?;

        let mut user = User::new(NewUserProps {
            username: params.username,
            email: params.email,
            first_name: params.first_name,
            last_name: params.last_name,
            password_hash: String::new(),
        })?;

        if self.repository.exists_by_username(&user.username).await? {
            return Err(UserError::UsernameTaken);
        }
        if self.repository.exists_by_email(&user.email).await? {
            return Err(UserError::EmailTaken);
        }

        user.password_hash = self.hasher.hash(&params.password)?;
        self.repository.save(&user).await?;

        self.logger
            .info(&format!("User registered with id: {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_logger, MockHasher, MockUserRepo};

    fn params() -> RegisterUserParams {
        RegisterUserParams {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password: "correct-horse".to_string(),
            password_confirmation: "correct-horse".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[tokio::test]
    async fn should_register_user_with_hashed_password() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists_by_username().returning(|_| Ok(false));
        mock_repo.expect_exists_by_email().returning(|_| Ok(false));
        mock_repo
            .expect_save()
            .withf(|user| user.password_hash == "hashed:correct-horse")
            .times(1)
            .returning(|_| Ok(()));

        let mut hasher = MockHasher::new();
        hasher
            .expect_hash()
            .returning(|password| Ok(format!("hashed:{}", password)));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: Arc::new(hasher),
            logger: mock_logger(),
        };

        let user = use_case.execute(params()).await.unwrap();
        assert_eq!(user.username, "jdoe");
        assert!(!user.is_staff);
    }

    #[tokio::test]
    async fn should_reject_taken_email() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists_by_username().returning(|_| Ok(false));
        mock_repo.expect_exists_by_email().returning(|_| Ok(true));
        mock_repo.expect_save().never();

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: Arc::new(MockHasher::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;
        assert!(matches!(result.unwrap_err(), UserError::EmailTaken));
    }

    #[tokio::test]
    async fn should_reject_taken_username() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists_by_username().returning(|_| Ok(true));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: Arc::new(MockHasher::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;
        assert!(matches!(result.unwrap_err(), UserError::UsernameTaken));
    }

    #[tokio::test]
    async fn should_reject_mismatched_confirmation_before_touching_repository() {
        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(MockUserRepo::new()),
            hasher: Arc::new(MockHasher::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                password_confirmation: "something-else".to_string(),
                ..params()
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::PasswordMismatch));
    }
}
