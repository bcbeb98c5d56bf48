#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("collection.title_empty")]
    TitleEmpty,
    #[error("collection.title_too_long")]
    TitleTooLong,
    #[error("collection.title_taken")]
    TitleTaken,
    #[error("collection.not_found")]
    NotFound,
    #[error("collection.featured_product_not_found")]
    FeaturedProductNotFound,
    #[error("collection.has_products")]
    HasProducts,
    #[error("collection.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
