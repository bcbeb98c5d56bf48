use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price: i64,
    pub inventory: i32,
    pub collection_id: Uuid,
    pub last_update: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.title,
            self.slug,
            self.description,
            self.unit_price,
            self.inventory,
            self.collection_id,
            self.last_update,
        )
    }
}
