use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::review::use_cases::create::{CreateReviewParams, CreateReviewUseCase};
use business::domain::review::use_cases::delete::{DeleteReviewParams, DeleteReviewUseCase};
use business::domain::review::use_cases::get_all::{GetReviewsParams, GetReviewsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::review::dto::{CreateReviewRequest, ReviewResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct ReviewApi {
    create_use_case: Arc<dyn CreateReviewUseCase>,
    get_all_use_case: Arc<dyn GetReviewsUseCase>,
    delete_use_case: Arc<dyn DeleteReviewUseCase>,
}

impl ReviewApi {
    pub fn new(
        create_use_case: Arc<dyn CreateReviewUseCase>,
        get_all_use_case: Arc<dyn GetReviewsUseCase>,
        delete_use_case: Arc<dyn DeleteReviewUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            delete_use_case,
        }
    }
}

#[OpenApi]
impl ReviewApi {
    /// List the reviews of a product, newest first
    #[oai(
        path = "/products/:product_id/reviews",
        method = "get",
        tag = "ApiTags::Reviews"
    )]
    async fn get_reviews(&self, product_id: Path<String>) -> GetReviewsResponse {
        let product_id = match parse_id(&product_id.0, "product.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetReviewsResponse::BadRequest(json),
        };

        match self
            .get_all_use_case
            .execute(GetReviewsParams { product_id })
            .await
        {
            Ok(reviews) => {
                GetReviewsResponse::Ok(Json(reviews.into_iter().map(|r| r.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetReviewsResponse::NotFound(json),
                    _ => GetReviewsResponse::InternalError(json),
                }
            }
        }
    }

    /// Review a product
    ///
    /// Each user can review a given product once.
    #[oai(
        path = "/products/:product_id/reviews",
        method = "post",
        tag = "ApiTags::Reviews"
    )]
    async fn create_review(
        &self,
        auth: JwtBearer,
        product_id: Path<String>,
        body: Json<CreateReviewRequest>,
    ) -> CreateReviewResponse {
        let product_id = match parse_id(&product_id.0, "product.invalid_id") {
            Ok(id) => id,
            Err(json) => return CreateReviewResponse::BadRequest(json),
        };

        let params = CreateReviewParams {
            product_id,
            principal: auth.0,
            name: body.0.name,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(review) => CreateReviewResponse::Created(Json(review.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateReviewResponse::BadRequest(json),
                    404 => CreateReviewResponse::NotFound(json),
                    409 => CreateReviewResponse::Conflict(json),
                    _ => CreateReviewResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a review
    ///
    /// Allowed for the review's author and for staff.
    #[oai(
        path = "/products/:product_id/reviews/:review_id",
        method = "delete",
        tag = "ApiTags::Reviews"
    )]
    async fn delete_review(
        &self,
        auth: JwtBearer,
        product_id: Path<String>,
        review_id: Path<String>,
    ) -> DeleteReviewResponse {
        let product_id = match parse_id(&product_id.0, "product.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteReviewResponse::BadRequest(json),
        };
        let review_id = match parse_id(&review_id.0, "review.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteReviewResponse::BadRequest(json),
        };

        let params = DeleteReviewParams {
            product_id,
            review_id,
            principal: auth.0,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteReviewResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteReviewResponse::Forbidden(json),
                    404 => DeleteReviewResponse::NotFound(json),
                    _ => DeleteReviewResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetReviewsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ReviewResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateReviewResponse {
    #[oai(status = 201)]
    Created(Json<ReviewResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteReviewResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
