use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::OrderError;
use crate::domain::cart::model::Cart;
use crate::domain::customer::model::Customer;
use crate::domain::product::model::ProductSummary;
use crate::domain::shared::permissions::{Principal, is_owner_or_staff};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Complete,
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Complete => write!(f, "complete"),
            PaymentStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "complete" => Ok(PaymentStatus::Complete),
            "failed" => Ok(PaymentStatus::Failed),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

/// A purchased line. `unit_price` is the product price when the order was placed.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product: ProductSummary,
    pub quantity: i32,
    pub unit_price: i64,
}

impl OrderItem {
    pub fn total_price(&self) -> i64 {
        i64::from(self.quantity).saturating_mul(self.unit_price)
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// User behind the customer, resolved for ownership checks.
    pub user_id: UserId,
    pub placed_at: DateTime<Utc>,
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Builds a pending order with one line per cart item, snapshotting unit prices.
    pub fn from_cart(customer: &Customer, cart: &Cart) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::CartEmpty);
        }

        let id = Uuid::new_v4();
        let items = cart
            .items
            .iter()
            .map(|line| OrderItem {
                id: Uuid::new_v4(),
                order_id: id,
                product: line.product.clone(),
                quantity: line.quantity,
                unit_price: line.product.unit_price,
            })
            .collect();

        Ok(Self {
            id,
            customer_id: customer.id,
            user_id: customer.user_id,
            placed_at: Utc::now(),
            payment_status: PaymentStatus::default(),
            items,
        })
    }

    pub fn from_repository(
        id: Uuid,
        customer_id: Uuid,
        user_id: UserId,
        placed_at: DateTime<Utc>,
        payment_status: PaymentStatus,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id,
            customer_id,
            user_id,
            placed_at,
            payment_status,
            items,
        }
    }

    pub fn total_price(&self) -> i64 {
        self.items
            .iter()
            .map(OrderItem::total_price)
            .fold(0, i64::saturating_add)
    }

    pub fn is_visible_to(&self, principal: &Principal) -> bool {
        is_owner_or_staff(Some(principal), &self.user_id)
    }
}
