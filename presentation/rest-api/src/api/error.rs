use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use uuid::Uuid;

/// Error body shared by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error kind (ValidationError, NotFound, Conflict, ...)
    pub name: String,
    /// Machine readable code such as `cart.not_found`
    pub code: String,
    /// Human readable description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, code: impl Into<String>, message: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.into(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Parses a path identifier, answering 400 with `code` when it is not a UUID.
pub fn parse_id(raw: &str, code: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| {
        Json(ErrorResponse::new(
            "ValidationError",
            code,
            "The identifier is not a valid UUID.",
        ))
    })
}

pub fn unauthorized() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Unauthorized",
        "auth.invalid_token",
        "The bearer token is missing or invalid.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_valid_uuid() {
        let id = Uuid::new_v4();

        assert_eq!(parse_id(&id.to_string(), "cart.invalid_id").unwrap(), id);
    }

    #[test]
    fn should_report_code_for_invalid_uuid() {
        let error = parse_id("42", "cart.invalid_id").unwrap_err();

        assert_eq!(error.0.name, "ValidationError");
        assert_eq!(error.0.code, "cart.invalid_id");
    }
}
