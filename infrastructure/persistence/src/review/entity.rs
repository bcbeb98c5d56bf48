use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::review::model::Review;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ReviewEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
}

impl ReviewEntity {
    pub fn into_domain(self) -> Review {
        Review::from_repository(
            self.id,
            self.product_id,
            UserId::new(self.user_id),
            self.name,
            self.description,
            self.date,
        )
    }
}
