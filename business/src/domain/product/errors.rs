#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.title_too_long")]
    TitleTooLong,
    #[error("product.invalid_slug")]
    InvalidSlug,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.price_too_high")]
    PriceTooHigh,
    #[error("product.negative_inventory")]
    NegativeInventory,
    #[error("product.invalid_price_range")]
    InvalidPriceRange,
    #[error("product.collection_not_found")]
    CollectionNotFound,
    #[error("product.title_taken")]
    TitleTaken,
    #[error("product.not_found")]
    NotFound,
    #[error("product.has_order_items")]
    HasOrderItems,
    #[error("product.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
