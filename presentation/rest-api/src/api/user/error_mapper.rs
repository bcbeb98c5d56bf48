use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            UserError::UsernameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Username is required.",
            ),
            UserError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Enter a valid email address.",
            ),
            UserError::FirstNameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "First name is required.",
            ),
            UserError::LastNameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Last name is required.",
            ),
            UserError::PasswordTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Password must be at least 8 characters long.",
            ),
            UserError::PasswordMismatch => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Passwords do not match.",
            ),
            UserError::EmailImmutable => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Email address cannot be changed.",
            ),
            UserError::UsernameTaken => (
                StatusCode::CONFLICT,
                "Conflict",
                "A user with that username already exists.",
            ),
            UserError::EmailTaken => (
                StatusCode::CONFLICT,
                "Conflict",
                "A user with that email already exists.",
            ),
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "No active account found with the given credentials.",
            ),
            UserError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Token is invalid or expired.",
            ),
            UserError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "User not found."),
            UserError::HashingFailed | UserError::TokenIssueFailed | UserError::Repository(_) => (
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
