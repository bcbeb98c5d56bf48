use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Title is required.",
            ),
            ProductError::TitleTooLong => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Title must be at most 255 characters.",
            ),
            ProductError::InvalidSlug => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Slug must contain at least one letter or digit.",
            ),
            ProductError::NegativePrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Unit price cannot be negative.",
            ),
            ProductError::PriceTooHigh => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Unit price exceeds the allowed maximum.",
            ),
            ProductError::NegativeInventory => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Inventory cannot be negative.",
            ),
            ProductError::InvalidPriceRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "unit_price__gt must be lower than unit_price__lt.",
            ),
            ProductError::CollectionNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Collection does not exist.",
            ),
            ProductError::TitleTaken => (
                StatusCode::CONFLICT,
                "Conflict",
                "A product with that title already exists.",
            ),
            ProductError::HasOrderItems => (
                StatusCode::CONFLICT,
                "Conflict",
                "Product cannot be deleted because it is associated with an order item.",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Product not found."),
            ProductError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "Only staff can manage products.",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Unexpected server error.",
            ),
        };

        (
            status,
            Json(ErrorResponse::new(name, self.to_string(), message)),
        )
    }
}
