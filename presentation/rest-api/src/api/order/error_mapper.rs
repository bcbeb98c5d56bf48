use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::CartNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "No cart with the given ID was found.",
            ),
            OrderError::CartEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "The cart is empty.",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Order not found."),
            OrderError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "Only staff can change an order.",
            ),
            OrderError::Repository(_) => (
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
