use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{MAX_UNIT_PRICE, price_with_tax, slugify};

pub const MAX_TITLE_LENGTH: usize = 255;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    /// Smallest currency unit.
    pub unit_price: i64,
    pub inventory: i32,
    pub collection_id: Uuid,
    pub last_update: DateTime<Utc>,
}

/// The slice of a product embedded in cart and order lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: Uuid,
    pub title: String,
    pub unit_price: i64,
}

pub struct NewProductProps {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub unit_price: i64,
    pub inventory: i32,
    pub collection_id: Uuid,
}

/// Partial update; `None` leaves a field untouched.
#[derive(Default)]
pub struct ProductChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
    pub unit_price: Option<i64>,
    pub inventory: Option<i32>,
    pub collection_id: Option<Uuid>,
}

fn validated_title(title: &str) -> Result<String, ProductError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ProductError::TitleEmpty);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ProductError::TitleTooLong);
    }
    Ok(title.to_string())
}

fn validated_slug(slug: Option<&str>, title: &str) -> Result<String, ProductError> {
    let slug = slugify(slug.unwrap_or(title));
    if slug.is_empty() {
        return Err(ProductError::InvalidSlug);
    }
    Ok(slug)
}

fn validated_amounts(unit_price: i64, inventory: i32) -> Result<(), ProductError> {
    if unit_price < 0 {
        return Err(ProductError::NegativePrice);
    }
    if unit_price > MAX_UNIT_PRICE {
        return Err(ProductError::PriceTooHigh);
    }
    if inventory < 0 {
        return Err(ProductError::NegativeInventory);
    }
    Ok(())
}

fn normalized_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let title = validated_title(&props.title)?;
        let slug = validated_slug(props.slug.as_deref(), &title)?;
        validated_amounts(props.unit_price, props.inventory)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            slug,
            description: normalized_description(props.description),
            unit_price: props.unit_price,
            inventory: props.inventory,
            collection_id: props.collection_id,
            last_update: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        title: String,
        slug: String,
        description: Option<String>,
        unit_price: i64,
        inventory: i32,
        collection_id: Uuid,
        last_update: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            slug,
            description,
            unit_price,
            inventory,
            collection_id,
            last_update,
        }
    }

    /// Applies a partial update, validating the merged result as a whole.
    pub fn apply(&mut self, changes: ProductChanges) -> Result<(), ProductError> {
        let title = match changes.title {
            Some(title) => validated_title(&title)?,
            None => self.title.clone(),
        };
        let slug = match changes.slug {
            Some(slug) => validated_slug(Some(&slug), &title)?,
            None => self.slug.clone(),
        };
        let unit_price = changes.unit_price.unwrap_or(self.unit_price);
        let inventory = changes.inventory.unwrap_or(self.inventory);
        validated_amounts(unit_price, inventory)?;

        self.title = title;
        self.slug = slug;
        if let Some(description) = changes.description {
            self.description = normalized_description(description);
        }
        self.unit_price = unit_price;
        self.inventory = inventory;
        if let Some(collection_id) = changes.collection_id {
            self.collection_id = collection_id;
        }
        self.last_update = Utc::now();
        Ok(())
    }

    pub fn price_with_tax(&self) -> i64 {
        price_with_tax(self.unit_price)
    }

    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            title: self.title.clone(),
            unit_price: self.unit_price,
        }
    }
}
