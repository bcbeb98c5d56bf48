use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::NotificationError;
use crate::domain::order::model::PaymentStatus;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadStatus {
    #[default]
    Unread,
    Read,
}

impl std::fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadStatus::Unread => write!(f, "unread"),
            ReadStatus::Read => write!(f, "read"),
        }
    }
}

impl std::str::FromStr for ReadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unread" => Ok(ReadStatus::Unread),
            "read" => Ok(ReadStatus::Read),
            _ => Err(format!("Invalid read status: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: UserId,
    /// Raised by staff or by the system rather than by the user's own actions.
    pub is_admin: bool,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: ReadStatus,
}

impl Notification {
    pub fn new(user_id: UserId, message: String, is_admin: bool) -> Result<Self, NotificationError> {
        let message = message.trim().to_string();
        if message.is_empty() {
            return Err(NotificationError::MessageEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            is_admin,
            message,
            created_at: Utc::now(),
            status: ReadStatus::default(),
        })
    }

    pub fn order_placed(user_id: UserId, order_id: Uuid) -> Self {
        Self::system(
            user_id,
            format!("Your order #{} has been placed successfully.", order_id),
        )
    }

    pub fn order_status_changed(user_id: UserId, order_id: Uuid, status: PaymentStatus) -> Self {
        Self::system(
            user_id,
            format!("Your order #{} has been updated to {}.", order_id, status),
        )
    }

    pub fn order_item_added(user_id: UserId, product_title: &str) -> Self {
        Self::system(
            user_id,
            format!("Product {} has been added to your order.", product_title),
        )
    }

    pub fn cart_created(user_id: UserId, cart_id: Uuid) -> Self {
        Self::activity(user_id, format!("Your cart has been created: {}", cart_id))
    }

    pub fn cart_item_added(user_id: UserId, product_title: &str) -> Self {
        Self::activity(
            user_id,
            format!("Product {} has been added to your cart.", product_title),
        )
    }

    pub fn cart_item_quantity_changed(user_id: UserId, product_title: &str, quantity: i32) -> Self {
        Self::activity(
            user_id,
            format!(
                "Quantity of product {} has been changed to {}.",
                product_title, quantity
            ),
        )
    }

    pub fn cart_item_removed(user_id: UserId, product_title: &str) -> Self {
        Self::activity(
            user_id,
            format!("Product {} has been removed from your cart.", product_title),
        )
    }

    fn system(user_id: UserId, message: String) -> Self {
        Self::generated(user_id, message, true)
    }

    /// Echo of the user's own cart activity.
    fn activity(user_id: UserId, message: String) -> Self {
        Self::generated(user_id, message, false)
    }

    fn generated(user_id: UserId, message: String, is_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            is_admin,
            message,
            created_at: Utc::now(),
            status: ReadStatus::Unread,
        }
    }

    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        is_admin: bool,
        message: String,
        created_at: DateTime<Utc>,
        status: ReadStatus,
    ) -> Self {
        Self {
            id,
            user_id,
            is_admin,
            message,
            created_at,
            status,
        }
    }

    pub fn mark_read(&mut self) {
        self.status = ReadStatus::Read;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_unread() {
        let notification =
            Notification::new(UserId::generate(), "Hello".to_string(), false).unwrap();
        assert_eq!(notification.status, ReadStatus::Unread);
    }

    #[test]
    fn should_reject_blank_message() {
        let result = Notification::new(UserId::generate(), " ".to_string(), true);
        assert!(matches!(result.unwrap_err(), NotificationError::MessageEmpty));
    }

    #[test]
    fn should_mention_order_and_status() {
        let order_id = Uuid::new_v4();
        let notification =
            Notification::order_status_changed(UserId::generate(), order_id, PaymentStatus::Complete);

        assert!(notification.is_admin);
        assert!(notification.message.contains(&order_id.to_string()));
        assert!(notification.message.ends_with("complete."));
    }

    #[test]
    fn should_mark_read() {
        let mut notification = Notification::order_placed(UserId::generate(), Uuid::new_v4());
        notification.mark_read();
        assert_eq!(notification.status, ReadStatus::Read);
    }

    #[test]
    fn should_flag_cart_activity_as_user_notifications() {
        let user_id = UserId::generate();

        let added = Notification::cart_item_added(user_id, "Mug");
        let changed = Notification::cart_item_quantity_changed(user_id, "Mug", 3);
        let removed = Notification::cart_item_removed(user_id, "Mug");

        assert!(!added.is_admin && !changed.is_admin && !removed.is_admin);
        assert_eq!(added.message, "Product Mug has been added to your cart.");
        assert_eq!(changed.message, "Quantity of product Mug has been changed to 3.");
        assert_eq!(removed.message, "Product Mug has been removed from your cart.");
    }

    #[test]
    fn should_flag_order_lines_as_system_notifications() {
        let notification = Notification::order_item_added(UserId::generate(), "Mug");

        assert!(notification.is_admin);
        assert_eq!(notification.status, ReadStatus::Unread);
    }
}
