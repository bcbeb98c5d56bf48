#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("customer.phone_too_long")]
    PhoneTooLong,
    #[error("customer.birth_date_in_future")]
    BirthDateInFuture,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
