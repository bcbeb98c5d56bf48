use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::order::use_cases::get_all::{GetOrdersParams, GetOrdersUseCase};
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::order::dto::{OrderResponse, PlaceOrderRequest, UpdateOrderRequest};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_use_case: Arc<dyn PlaceOrderUseCase>,
    get_all_use_case: Arc<dyn GetOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        place_use_case: Arc<dyn PlaceOrderUseCase>,
        get_all_use_case: Arc<dyn GetOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            place_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_status_use_case,
        }
    }
}

/// Orders
///
/// Users see their own orders, staff see all of them.
#[OpenApi]
impl OrderApi {
    /// Place an order from a cart
    ///
    /// Snapshots the current product prices into order items and deletes the
    /// cart, all in one transaction.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn place_order(&self, auth: JwtBearer, body: Json<PlaceOrderRequest>) -> PlaceOrderResponse {
        let params = PlaceOrderParams {
            cart_id: body.0.cart_id,
            principal: auth.0,
        };

        match self.place_use_case.execute(params).await {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// List orders, newest first
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_orders(&self, auth: JwtBearer) -> GetOrdersResponse {
        match self
            .get_all_use_case
            .execute(GetOrdersParams { principal: auth.0 })
            .await
        {
            Ok(orders) => {
                GetOrdersResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetOrdersResponse::InternalError(json)
            }
        }
    }

    /// Get an order by ID
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, auth: JwtBearer, id: Path<String>) -> GetOrderByIdResponse {
        let id = match parse_id(&id.0, "order.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetOrderByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams {
                id,
                principal: auth.0,
            })
            .await
        {
            Ok(order) => GetOrderByIdResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderByIdResponse::NotFound(json),
                    _ => GetOrderByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Change the payment status of an order
    ///
    /// The order's user is notified of every change.
    #[oai(path = "/orders/:id", method = "patch", tag = "ApiTags::Orders")]
    async fn update_order(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<UpdateOrderRequest>,
    ) -> UpdateOrderResponse {
        let id = match parse_id(&id.0, "order.invalid_id") {
            Ok(id) => id,
            Err(json) => return UpdateOrderResponse::BadRequest(json),
        };

        let params = UpdateOrderStatusParams {
            id,
            principal: auth.0,
            payment_status: body.0.payment_status.into(),
        };

        match self.update_status_use_case.execute(params).await {
            Ok(order) => UpdateOrderResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => UpdateOrderResponse::Forbidden(json),
                    404 => UpdateOrderResponse::NotFound(json),
                    _ => UpdateOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderByIdResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
