#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.insufficient_stock")]
    InsufficientStock,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
