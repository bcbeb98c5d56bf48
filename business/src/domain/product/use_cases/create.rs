use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::permissions::Principal;

pub struct CreateProductParams {
    pub principal: Principal,
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub unit_price: i64,
    pub inventory: i32,
    pub collection_id: Uuid,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
