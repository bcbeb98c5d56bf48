use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::errors::ReviewError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Review {
    pub fn new(
        product_id: Uuid,
        user_id: UserId,
        name: String,
        description: String,
    ) -> Result<Self, ReviewError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ReviewError::NameEmpty);
        }
        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(ReviewError::DescriptionEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            product_id,
            user_id,
            name,
            description,
            date: Utc::now().date_naive(),
        })
    }

    pub fn from_repository(
        id: Uuid,
        product_id: Uuid,
        user_id: UserId,
        name: String,
        description: String,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            product_id,
            user_id,
            name,
            description,
            date,
        }
    }
}
