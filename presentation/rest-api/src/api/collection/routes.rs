use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::collection::use_cases::create::{
    CreateCollectionParams, CreateCollectionUseCase,
};
use business::domain::collection::use_cases::delete::{
    DeleteCollectionParams, DeleteCollectionUseCase,
};
use business::domain::collection::use_cases::get_all::GetAllCollectionsUseCase;
use business::domain::collection::use_cases::get_by_id::{
    GetCollectionByIdParams, GetCollectionByIdUseCase,
};
use business::domain::collection::use_cases::update::{
    UpdateCollectionParams, UpdateCollectionUseCase,
};

use crate::api::collection::dto::{
    CollectionResponse, CreateCollectionRequest, UpdateCollectionRequest, into_patch,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CollectionApi {
    create_use_case: Arc<dyn CreateCollectionUseCase>,
    get_all_use_case: Arc<dyn GetAllCollectionsUseCase>,
    get_by_id_use_case: Arc<dyn GetCollectionByIdUseCase>,
    update_use_case: Arc<dyn UpdateCollectionUseCase>,
    delete_use_case: Arc<dyn DeleteCollectionUseCase>,
}

impl CollectionApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCollectionUseCase>,
        get_all_use_case: Arc<dyn GetAllCollectionsUseCase>,
        get_by_id_use_case: Arc<dyn GetCollectionByIdUseCase>,
        update_use_case: Arc<dyn UpdateCollectionUseCase>,
        delete_use_case: Arc<dyn DeleteCollectionUseCase>,
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

/// Catalog collections
///
/// Anyone can browse collections. Only staff can change them.
#[OpenApi]
impl CollectionApi {
    /// Create a collection
    #[oai(path = "/collections", method = "post", tag = "ApiTags::Collections")]
    async fn create_collection(
        &self,
        auth: JwtBearer,
        body: Json<CreateCollectionRequest>,
    ) -> CreateCollectionResponse {
        let params = CreateCollectionParams {
            principal: auth.0,
            title: body.0.title,
            featured_product_id: body.0.featured_product_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(collection) => CreateCollectionResponse::Created(Json(collection.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCollectionResponse::BadRequest(json),
                    403 => CreateCollectionResponse::Forbidden(json),
                    409 => CreateCollectionResponse::Conflict(json),
                    _ => CreateCollectionResponse::InternalError(json),
                }
            }
        }
    }

    /// List collections with their product counts
    #[oai(path = "/collections", method = "get", tag = "ApiTags::Collections")]
    async fn get_all_collections(&self) -> GetAllCollectionsResponse {
        match self.get_all_use_case.execute().await {
            Ok(collections) => GetAllCollectionsResponse::Ok(Json(
                collections.into_iter().map(|c| c.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCollectionsResponse::InternalError(json)
            }
        }
    }

    /// Get a collection by ID
    #[oai(path = "/collections/:id", method = "get", tag = "ApiTags::Collections")]
    async fn get_collection_by_id(&self, id: Path<String>) -> GetCollectionByIdResponse {
        let id = match parse_id(&id.0, "collection.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetCollectionByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetCollectionByIdParams { id })
            .await
        {
            Ok(collection) => GetCollectionByIdResponse::Ok(Json(collection.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCollectionByIdResponse::NotFound(json),
                    _ => GetCollectionByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a collection
    #[oai(path = "/collections/:id", method = "patch", tag = "ApiTags::Collections")]
    async fn update_collection(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<UpdateCollectionRequest>,
    ) -> UpdateCollectionResponse {
        let id = match parse_id(&id.0, "collection.invalid_id") {
            Ok(id) => id,
            Err(json) => return UpdateCollectionResponse::BadRequest(json),
        };

        let params = UpdateCollectionParams {
            id,
            principal: auth.0,
            title: body.0.title,
            featured_product_id: into_patch(body.0.featured_product_id),
        };

        match self.update_use_case.execute(params).await {
            Ok(collection) => UpdateCollectionResponse::Ok(Json(collection.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCollectionResponse::BadRequest(json),
                    403 => UpdateCollectionResponse::Forbidden(json),
                    404 => UpdateCollectionResponse::NotFound(json),
                    409 => UpdateCollectionResponse::Conflict(json),
                    _ => UpdateCollectionResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a collection
    ///
    /// Refused while any product still belongs to the collection.
    #[oai(path = "/collections/:id", method = "delete", tag = "ApiTags::Collections")]
    async fn delete_collection(&self, auth: JwtBearer, id: Path<String>) -> DeleteCollectionResponse {
        let id = match parse_id(&id.0, "collection.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteCollectionResponse::BadRequest(json),
        };

        let params = DeleteCollectionParams {
            id,
            principal: auth.0,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteCollectionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteCollectionResponse::Forbidden(json),
                    404 => DeleteCollectionResponse::NotFound(json),
                    409 => DeleteCollectionResponse::Conflict(json),
                    _ => DeleteCollectionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCollectionResponse {
    #[oai(status = 201)]
    Created(Json<CollectionResponse>),
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
pub enum GetAllCollectionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CollectionResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCollectionByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CollectionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCollectionResponse {
    #[oai(status = 200)]
    Ok(Json<CollectionResponse>),
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
pub enum DeleteCollectionResponse {
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
