use std::sync::Arc;

use poem::Request;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::create::{CreateCartParams, CreateCartUseCase};
use business::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use business::domain::cart::use_cases::get_by_id::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_item::{
    UpdateCartItemParams, UpdateCartItemUseCase,
};
use business::domain::shared::permissions::Principal;

use crate::api::cart::dto::{
    AddCartItemRequest, CartItemResponse, CartResponse, UpdateCartItemRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id, unauthorized};
use crate::api::security::optional_principal;
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
    delete_use_case: Arc<dyn DeleteCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
        delete_use_case: Arc<dyn DeleteCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_use_case,
            delete_use_case,
            add_item_use_case,
            update_item_use_case,
            remove_item_use_case,
        }
    }
}

fn caller(req: &Request) -> Result<Option<Principal>, Json<ErrorResponse>> {
    optional_principal(req).map_err(|_| unauthorized())
}

/// Shopping carts
///
/// Authentication is optional. A cart created with a bearer token belongs to
/// that user and is hidden from everyone else; an anonymous cart is open to
/// whoever holds its ID.
#[OpenApi]
impl CartApi {
    /// Create a cart
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self, req: &Request) -> CreateCartResponse {
        let principal = match caller(req) {
            Ok(principal) => principal,
            Err(json) => return CreateCartResponse::Unauthorized(json),
        };

        match self
            .create_use_case
            .execute(CreateCartParams { principal })
            .await
        {
            Ok(cart) => CreateCartResponse::Created(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// Get a cart with its items and total
    #[oai(path = "/carts/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart(&self, req: &Request, id: Path<String>) -> GetCartResponse {
        let principal = match caller(req) {
            Ok(principal) => principal,
            Err(json) => return GetCartResponse::Unauthorized(json),
        };
        let cart_id = match parse_id(&id.0, "cart.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetCartResponse::BadRequest(json),
        };

        match self
            .get_use_case
            .execute(GetCartParams { cart_id, principal })
            .await
        {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartResponse::NotFound(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a cart
    #[oai(path = "/carts/:id", method = "delete", tag = "ApiTags::Carts")]
    async fn delete_cart(&self, req: &Request, id: Path<String>) -> DeleteCartResponse {
        let principal = match caller(req) {
            Ok(principal) => principal,
            Err(json) => return DeleteCartResponse::Unauthorized(json),
        };
        let cart_id = match parse_id(&id.0, "cart.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteCartResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteCartParams { cart_id, principal })
            .await
        {
            Ok(()) => DeleteCartResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCartResponse::NotFound(json),
                    _ => DeleteCartResponse::InternalError(json),
                }
            }
        }
    }

    /// List the items of a cart
    #[oai(path = "/carts/:id/items", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_items(&self, req: &Request, id: Path<String>) -> GetCartItemsResponse {
        let principal = match caller(req) {
            Ok(principal) => principal,
            Err(json) => return GetCartItemsResponse::Unauthorized(json),
        };
        let cart_id = match parse_id(&id.0, "cart.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetCartItemsResponse::BadRequest(json),
        };

        match self
            .get_use_case
            .execute(GetCartParams { cart_id, principal })
            .await
        {
            Ok(cart) => GetCartItemsResponse::Ok(Json(
                cart.items.into_iter().map(|i| i.into()).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartItemsResponse::NotFound(json),
                    _ => GetCartItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to a cart
    ///
    /// Adding a product that is already in the cart increases the quantity of
    /// the existing line instead of creating a second one.
    #[oai(path = "/carts/:id/items", method = "post", tag = "ApiTags::Carts")]
    async fn add_cart_item(
        &self,
        req: &Request,
        id: Path<String>,
        body: Json<AddCartItemRequest>,
    ) -> AddCartItemResponse {
        let principal = match caller(req) {
            Ok(principal) => principal,
            Err(json) => return AddCartItemResponse::Unauthorized(json),
        };
        let cart_id = match parse_id(&id.0, "cart.invalid_id") {
            Ok(id) => id,
            Err(json) => return AddCartItemResponse::BadRequest(json),
        };

        let params = AddCartItemParams {
            cart_id,
            principal,
            product_id: body.0.product_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(item) => AddCartItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartItemResponse::BadRequest(json),
                    404 => AddCartItemResponse::NotFound(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Change the quantity of a cart item
    #[oai(
        path = "/carts/:id/items/:item_id",
        method = "patch",
        tag = "ApiTags::Carts"
    )]
    async fn update_cart_item(
        &self,
        req: &Request,
        id: Path<String>,
        item_id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> UpdateCartItemResponse {
        let principal = match caller(req) {
            Ok(principal) => principal,
            Err(json) => return UpdateCartItemResponse::Unauthorized(json),
        };
        let cart_id = match parse_id(&id.0, "cart.invalid_id") {
            Ok(id) => id,
            Err(json) => return UpdateCartItemResponse::BadRequest(json),
        };
        let item_id = match parse_id(&item_id.0, "cart.invalid_item_id") {
            Ok(id) => id,
            Err(json) => return UpdateCartItemResponse::BadRequest(json),
        };

        let params = UpdateCartItemParams {
            cart_id,
            item_id,
            principal,
            quantity: body.0.quantity,
        };

        match self.update_item_use_case.execute(params).await {
            Ok(item) => UpdateCartItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCartItemResponse::BadRequest(json),
                    404 => UpdateCartItemResponse::NotFound(json),
                    _ => UpdateCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an item from a cart
    #[oai(
        path = "/carts/:id/items/:item_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_cart_item(
        &self,
        req: &Request,
        id: Path<String>,
        item_id: Path<String>,
    ) -> RemoveCartItemResponse {
        let principal = match caller(req) {
            Ok(principal) => principal,
            Err(json) => return RemoveCartItemResponse::Unauthorized(json),
        };
        let cart_id = match parse_id(&id.0, "cart.invalid_id") {
            Ok(id) => id,
            Err(json) => return RemoveCartItemResponse::BadRequest(json),
        };
        let item_id = match parse_id(&item_id.0, "cart.invalid_item_id") {
            Ok(id) => id,
            Err(json) => return RemoveCartItemResponse::BadRequest(json),
        };

        let params = RemoveCartItemParams {
            cart_id,
            item_id,
            principal,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(()) => RemoveCartItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveCartItemResponse::NotFound(json),
                    _ => RemoveCartItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 201)]
    Created(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
