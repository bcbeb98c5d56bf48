#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification.message_empty")]
    MessageEmpty,
    #[error("notification.recipient_not_found")]
    RecipientNotFound,
    #[error("notification.not_found")]
    NotFound,
    #[error("notification.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
