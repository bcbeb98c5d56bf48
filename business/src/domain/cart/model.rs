use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::product::model::ProductSummary;
use crate::domain::shared::permissions::{Principal, may_access};
use crate::domain::shared::value_objects::UserId;

/// Carts inactive for longer than this are swept by the cleanup job.
pub const CART_RETENTION_DAYS: i64 = 3;
pub const MAX_QUANTITY: i32 = i16::MAX as i32;

/// A positive line quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(i32);

impl Quantity {
    pub fn new(value: i32) -> Result<Self, CartError> {
        if !(1..=MAX_QUANTITY).contains(&value) {
            return Err(CartError::InvalidQuantity);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Adds to an existing line quantity, failing when the sum leaves the valid range.
    pub fn added_to(&self, existing: i32) -> Result<Self, CartError> {
        Self::new(existing.saturating_add(self.0))
    }
}

#[derive(Debug, Clone)]
pub struct CartItem {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product: ProductSummary,
    pub quantity: i32,
}

impl CartItem {
    pub fn total_price(&self) -> i64 {
        i64::from(self.quantity).saturating_mul(self.product.unit_price)
    }
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub owner: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(owner: Option<UserId>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            created_at: now,
            last_activity: now,
            items: Vec::new(),
        }
    }

    pub fn from_repository(
        id: Uuid,
        owner: Option<UserId>,
        created_at: DateTime<Utc>,
        last_activity: DateTime<Utc>,
        items: Vec<CartItem>,
    ) -> Self {
        Self {
            id,
            owner,
            created_at,
            last_activity,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_price(&self) -> i64 {
        self.items
            .iter()
            .map(CartItem::total_price)
            .fold(0, i64::saturating_add)
    }

    pub fn item(&self, item_id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn item_for_product(&self, product_id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    /// Owned carts are visible to their owner and staff only.
    pub fn is_accessible_by(&self, principal: Option<&Principal>) -> bool {
        may_access(principal, self.owner.as_ref())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.last_activity < expiry_cutoff(now)
    }
}

/// Carts whose last activity is older than the returned instant are stale.
pub fn expiry_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(CART_RETENTION_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(cart_id: Uuid, unit_price: i64, quantity: i32) -> CartItem {
        CartItem {
            id: Uuid::new_v4(),
            cart_id,
            product: ProductSummary {
                id: Uuid::new_v4(),
                title: "Tea".to_string(),
                unit_price,
            },
            quantity,
        }
    }

    #[test]
    fn should_reject_zero_and_negative_quantities() {
        assert!(matches!(Quantity::new(0).unwrap_err(), CartError::InvalidQuantity));
        assert!(matches!(Quantity::new(-3).unwrap_err(), CartError::InvalidQuantity));
        assert_eq!(Quantity::new(2).unwrap().value(), 2);
    }

    #[test]
    fn should_sum_quantities_when_adding_to_existing_line() {
        let quantity = Quantity::new(3).unwrap();
        assert_eq!(quantity.added_to(2).unwrap().value(), 5);
    }

    #[test]
    fn should_reject_sum_above_maximum() {
        let quantity = Quantity::new(MAX_QUANTITY).unwrap();
        assert!(quantity.added_to(1).is_err());
    }

    #[test]
    fn should_compute_line_and_cart_totals() {
        let mut cart = Cart::new(None);
        cart.items.push(item(cart.id, 250, 2));
        cart.items.push(item(cart.id, 100, 1));

        assert_eq!(cart.items[0].total_price(), 500);
        assert_eq!(cart.total_price(), 600);
    }

    #[test]
    fn should_total_largest_line_without_overflow() {
        use crate::domain::product::value_objects::MAX_UNIT_PRICE;

        let mut cart = Cart::new(None);
        cart.items.push(item(cart.id, MAX_UNIT_PRICE, MAX_QUANTITY));
        cart.items.push(item(cart.id, MAX_UNIT_PRICE, MAX_QUANTITY));

        assert_eq!(cart.items[0].total_price(), MAX_UNIT_PRICE * i64::from(MAX_QUANTITY));
        assert_eq!(cart.total_price(), 2 * MAX_UNIT_PRICE * i64::from(MAX_QUANTITY));
    }

    #[test]
    fn should_find_item_by_product() {
        let mut cart = Cart::new(None);
        let line = item(cart.id, 100, 1);
        let product_id = line.product.id;
        cart.items.push(line);

        assert!(cart.item_for_product(product_id).is_some());
        assert!(cart.item_for_product(Uuid::new_v4()).is_none());
    }

    #[test]
    fn should_hide_owned_cart_from_other_users() {
        let owner = UserId::generate();
        let cart = Cart::new(Some(owner));

        assert!(cart.is_accessible_by(Some(&Principal::customer(owner))));
        assert!(!cart.is_accessible_by(Some(&Principal::customer(UserId::generate()))));
        assert!(!cart.is_accessible_by(None));
    }

    #[test]
    fn should_open_anonymous_cart_to_anyone() {
        let cart = Cart::new(None);
        assert!(cart.is_accessible_by(None));
    }

    #[test]
    fn should_expire_after_retention_window() {
        let now = Utc::now();
        let mut cart = Cart::new(None);

        cart.last_activity = now - Duration::days(CART_RETENTION_DAYS) - Duration::minutes(1);
        assert!(cart.is_expired(now));

        cart.last_activity = now - Duration::days(CART_RETENTION_DAYS) + Duration::minutes(1);
        assert!(!cart.is_expired(now));
    }

    proptest! {
        #[test]
        fn cart_total_is_sum_of_lines(lines in prop::collection::vec((0i64..100_000, 1i32..1000), 0..20)) {
            let mut cart = Cart::new(None);
            for (price, quantity) in &lines {
                cart.items.push(item(cart.id, *price, *quantity));
            }
            let expected: i64 = lines.iter().map(|(p, q)| p * i64::from(*q)).sum();
            prop_assert_eq!(cart.total_price(), expected);
        }
    }
}
