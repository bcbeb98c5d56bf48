use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::collection::errors::CollectionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CollectionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CollectionError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Title is required.",
            ),
            CollectionError::TitleTooLong => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Title must be at most 255 characters.",
            ),
            CollectionError::FeaturedProductNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Featured product does not exist.",
            ),
            CollectionError::TitleTaken => (
                StatusCode::CONFLICT,
                "Conflict",
                "A collection with that title already exists.",
            ),
            CollectionError::HasProducts => (
                StatusCode::CONFLICT,
                "Conflict",
                "Collection cannot be deleted because it includes one or more products.",
            ),
            CollectionError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "Collection not found.",
            ),
            CollectionError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "Only staff can manage collections.",
            ),
            CollectionError::Repository(_) => (
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_collection_with_products_to_conflict() {
        let (status, json) = CollectionError::HasProducts.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.code, "collection.has_products");
    }
}
