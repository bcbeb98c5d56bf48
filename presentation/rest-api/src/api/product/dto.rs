use chrono::{DateTime, Utc};
use poem_openapi::{Object, types::MaybeUndefined};
use uuid::Uuid;

use business::domain::product::model::{Product, ProductChanges, ProductSummary};
use business::domain::shared::pagination::Page;

use crate::api::collection::dto::into_patch;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Unique title, up to 255 characters
    pub title: String,
    /// Derived from the title when omitted
    #[oai(skip_serializing_if_is_none)]
    pub slug: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Price in cents, not negative
    pub unit_price: i64,
    /// Units in stock, not negative
    pub inventory: i32,
    pub collection_id: Uuid,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub slug: Option<String>,
    /// Send `null` to clear the description
    pub description: MaybeUndefined<String>,
    #[oai(skip_serializing_if_is_none)]
    pub unit_price: Option<i64>,
    #[oai(skip_serializing_if_is_none)]
    pub inventory: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub collection_id: Option<Uuid>,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            title: request.title,
            slug: request.slug,
            description: into_patch(request.description),
            unit_price: request.unit_price,
            inventory: request.inventory,
            collection_id: request.collection_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Price in cents
    pub unit_price: i64,
    /// Price in cents including tax
    pub price_with_tax: i64,
    pub inventory: i32,
    pub collection_id: String,
    pub last_update: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            price_with_tax: product.price_with_tax(),
            id: product.id.to_string(),
            title: product.title,
            slug: product.slug,
            description: product.description,
            unit_price: product.unit_price,
            inventory: product.inventory,
            collection_id: product.collection_id.to_string(),
            last_update: product.last_update,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    /// Total number of matching products
    pub count: u64,
    pub page: u32,
    pub page_size: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub results: Vec<ProductResponse>,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            count: page.total,
            page: page.page,
            page_size: page.page_size,
            has_next: page.has_next(),
            has_previous: page.has_previous(),
            results: page.items.into_iter().map(|p| p.into()).collect(),
        }
    }
}

/// Product as embedded in cart and order lines
#[derive(Debug, Clone, Object)]
pub struct ProductSummaryResponse {
    pub id: String,
    pub title: String,
    pub unit_price: i64,
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(summary: ProductSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title,
            unit_price: summary.unit_price,
        }
    }
}
