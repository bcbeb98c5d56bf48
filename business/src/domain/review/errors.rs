#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review.name_empty")]
    NameEmpty,
    #[error("review.description_empty")]
    DescriptionEmpty,
    #[error("review.product_not_found")]
    ProductNotFound,
    #[error("review.already_reviewed")]
    AlreadyReviewed,
    #[error("review.not_found")]
    NotFound,
    #[error("review.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
