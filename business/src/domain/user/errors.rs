#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.username_empty")]
    UsernameEmpty,
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.first_name_empty")]
    FirstNameEmpty,
    #[error("user.last_name_empty")]
    LastNameEmpty,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.password_mismatch")]
    PasswordMismatch,
    #[error("user.username_taken")]
    UsernameTaken,
    #[error("user.email_taken")]
    EmailTaken,
    #[error("user.email_immutable")]
    EmailImmutable,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.invalid_token")]
    InvalidToken,
    #[error("user.not_found")]
    NotFound,
    #[error("user.hashing_failed")]
    HashingFailed,
    #[error("user.token_issue_failed")]
    TokenIssueFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
