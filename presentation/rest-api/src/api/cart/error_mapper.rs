use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Cart not found."),
            CartError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "Cart item not found.")
            }
            CartError::ProductNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "No product with the given ID was found.",
            ),
            CartError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Quantity must be a positive number.",
            ),
            CartError::InsufficientStock => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Not enough inventory for the requested quantity.",
            ),
            CartError::Repository(_) => (
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
