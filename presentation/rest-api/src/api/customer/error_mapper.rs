use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::customer::errors::CustomerError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CustomerError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CustomerError::PhoneTooLong => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Phone number is too long.",
            ),
            CustomerError::BirthDateInFuture => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Birth date cannot be in the future.",
            ),
            CustomerError::Repository(_) => (
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
