use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::notification::errors::NotificationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for NotificationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            NotificationError::MessageEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Message is required.",
            ),
            NotificationError::RecipientNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Recipient does not exist.",
            ),
            NotificationError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "Notification not found.",
            ),
            NotificationError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "Only staff can manage notifications.",
            ),
            NotificationError::Repository(_) => (
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
