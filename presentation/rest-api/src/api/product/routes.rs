use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::{ProductFilter, ProductOrdering};
use business::domain::shared::pagination::PageRequest;

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::product::dto::{
    CreateProductRequest, ProductPageResponse, ProductResponse, UpdateProductRequest,
};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_ordering(raw: Option<&str>) -> Result<ProductOrdering, Json<ErrorResponse>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(ProductOrdering::default()),
        Some(raw) => raw.parse().map_err(|_| {
            Json(ErrorResponse::new(
                "ValidationError",
                "product.invalid_ordering",
                "ordering must be one of unit_price, -unit_price, last_update, -last_update.",
            ))
        }),
    }
}

/// Product catalog
///
/// Anyone can browse and search the catalog. Only staff can change it.
#[OpenApi]
impl ProductApi {
    /// Create a product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: JwtBearer,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let params = CreateProductParams {
            principal: auth.0,
            title: body.0.title,
            slug: body.0.slug,
            description: body.0.description,
            unit_price: body.0.unit_price,
            inventory: body.0.inventory,
            collection_id: body.0.collection_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    403 => CreateProductResponse::Forbidden(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Supports filtering by collection and price bounds, a case-insensitive
    /// search over title and description, ordering and pagination.
    /// `ordering` is one of unit_price, -unit_price, last_update or
    /// -last_update (default: title). `page` is 1-based and `page_size`
    /// defaults to 10, capped at 100.
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        collection_id: Query<Option<Uuid>>,
        #[oai(name = "unit_price__gt")] unit_price_gt: Query<Option<i64>>,
        #[oai(name = "unit_price__lt")] unit_price_lt: Query<Option<i64>>,
        search: Query<Option<String>>,
        ordering: Query<Option<String>>,
        page: Query<Option<u32>>,
        page_size: Query<Option<u32>>,
    ) -> GetAllProductsResponse {
        let ordering = match parse_ordering(ordering.0.as_deref()) {
            Ok(ordering) => ordering,
            Err(json) => return GetAllProductsResponse::BadRequest(json),
        };

        let params = GetAllProductsParams {
            filter: ProductFilter {
                collection_id: collection_id.0,
                unit_price_gt: unit_price_gt.0,
                unit_price_lt: unit_price_lt.0,
                search: search.0,
                ordering,
            },
            page: PageRequest::new(page.0, page_size.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => GetAllProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllProductsResponse::BadRequest(json),
                    _ => GetAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_id(&id.0, "product.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Only the fields present in the body change.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let id = match parse_id(&id.0, "product.invalid_id") {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id,
            principal: auth.0,
            changes: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    403 => UpdateProductResponse::Forbidden(json),
                    404 => UpdateProductResponse::NotFound(json),
                    409 => UpdateProductResponse::Conflict(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Refused once the product appears on any order.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: JwtBearer, id: Path<String>) -> DeleteProductResponse {
        let id = match parse_id(&id.0, "product.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        let params = DeleteProductParams {
            id,
            principal: auth.0,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteProductResponse::Forbidden(json),
                    404 => DeleteProductResponse::NotFound(json),
                    409 => DeleteProductResponse::Conflict(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
