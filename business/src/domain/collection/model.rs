use uuid::Uuid;

use super::errors::CollectionError;

pub const MAX_TITLE_LENGTH: usize = 255;

#[derive(Debug, Clone)]
pub struct Collection {
    pub id: Uuid,
    pub title: String,
    pub featured_product_id: Option<Uuid>,
    /// Derived on read; never persisted.
    pub products_count: i64,
}

fn validated_title(title: &str) -> Result<String, CollectionError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CollectionError::TitleEmpty);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CollectionError::TitleTooLong);
    }
    Ok(title.to_string())
}

impl Collection {
    pub fn new(title: String, featured_product_id: Option<Uuid>) -> Result<Self, CollectionError> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: validated_title(&title)?,
            featured_product_id,
            products_count: 0,
        })
    }

    pub fn from_repository(
        id: Uuid,
        title: String,
        featured_product_id: Option<Uuid>,
        products_count: i64,
    ) -> Self {
        Self {
            id,
            title,
            featured_product_id,
            products_count,
        }
    }

    pub fn retitle(&mut self, title: String) -> Result<(), CollectionError> {
        self.title = validated_title(&title)?;
        Ok(())
    }

    pub fn has_products(&self) -> bool {
        self.products_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_collection_with_trimmed_title() {
        let collection = Collection::new("  Beauty ".to_string(), None).unwrap();

        assert_eq!(collection.title, "Beauty");
        assert_eq!(collection.products_count, 0);
    }

    #[test]
    fn should_reject_empty_title() {
        let result = Collection::new(" ".to_string(), None);
        assert!(matches!(result.unwrap_err(), CollectionError::TitleEmpty));
    }

    #[test]
    fn should_reject_overlong_title() {
        let result = Collection::new("x".repeat(MAX_TITLE_LENGTH + 1), None);
        assert!(matches!(result.unwrap_err(), CollectionError::TitleTooLong));
    }

    #[test]
    fn should_report_products_from_count() {
        let collection = Collection::from_repository(Uuid::new_v4(), "Toys".into(), None, 3);
        assert!(collection.has_products());
    }
}
