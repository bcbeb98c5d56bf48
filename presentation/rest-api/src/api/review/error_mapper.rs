use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::review::errors::ReviewError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReviewError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ReviewError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Name is required.",
            ),
            ReviewError::DescriptionEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Description is required.",
            ),
            ReviewError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "Product not found.")
            }
            ReviewError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Review not found."),
            ReviewError::AlreadyReviewed => (
                StatusCode::CONFLICT,
                "Conflict",
                "You have already reviewed this product.",
            ),
            ReviewError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "Only the author or staff can delete a review.",
            ),
            ReviewError::Repository(_) => (
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
