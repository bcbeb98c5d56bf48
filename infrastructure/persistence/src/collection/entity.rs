use sqlx::FromRow;
use uuid::Uuid;

use business::domain::collection::model::Collection;

#[derive(Debug, FromRow)]
pub struct CollectionEntity {
    pub id: Uuid,
    pub title: String,
    pub featured_product_id: Option<Uuid>,
    pub products_count: i64,
}

impl CollectionEntity {
    pub fn into_domain(self) -> Collection {
        Collection::from_repository(
            self.id,
            self.title,
            self.featured_product_id,
            self.products_count,
        )
    }
}
