use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::model::{Order, OrderItem, PaymentStatus};

use crate::api::product::dto::ProductSummaryResponse;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum PaymentStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "complete")]
    Complete,
    #[oai(rename = "failed")]
    Failed,
}

impl From<PaymentStatus> for PaymentStatusDto {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => PaymentStatusDto::Pending,
            PaymentStatus::Complete => PaymentStatusDto::Complete,
            PaymentStatus::Failed => PaymentStatusDto::Failed,
        }
    }
}

impl From<PaymentStatusDto> for PaymentStatus {
    fn from(dto: PaymentStatusDto) -> Self {
        match dto {
            PaymentStatusDto::Pending => PaymentStatus::Pending,
            PaymentStatusDto::Complete => PaymentStatus::Complete,
            PaymentStatusDto::Failed => PaymentStatus::Failed,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PlaceOrderRequest {
    /// Cart converted into the order; it is deleted on success
    pub cart_id: Uuid,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderRequest {
    pub payment_status: PaymentStatusDto,
}

#[derive(Debug, Clone, Object)]
pub struct OrderItemResponse {
    pub id: String,
    pub product: ProductSummaryResponse,
    pub quantity: i32,
    /// Price in cents when the order was placed
    pub unit_price: i64,
    pub total_price: i64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            total_price: item.total_price(),
            id: item.id.to_string(),
            product: item.product.into(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    pub id: String,
    pub customer_id: String,
    pub placed_at: DateTime<Utc>,
    pub payment_status: PaymentStatusDto,
    pub items: Vec<OrderItemResponse>,
    pub total_price: i64,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            total_price: order.total_price(),
            id: order.id.to_string(),
            customer_id: order.customer_id.to_string(),
            placed_at: order.placed_at,
            payment_status: order.payment_status.into(),
            items: order.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
