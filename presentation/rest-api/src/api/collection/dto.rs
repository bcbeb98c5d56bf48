use poem_openapi::{Object, types::MaybeUndefined};
use uuid::Uuid;

use business::domain::collection::model::Collection;

#[derive(Debug, Clone, Object)]
pub struct CreateCollectionRequest {
    /// Unique title, up to 255 characters
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub featured_product_id: Option<Uuid>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCollectionRequest {
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    /// Send `null` to clear the featured product
    pub featured_product_id: MaybeUndefined<Uuid>,
}

#[derive(Debug, Clone, Object)]
pub struct CollectionResponse {
    pub id: String,
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub featured_product_id: Option<String>,
    /// Number of products in the collection
    pub products_count: i64,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id.to_string(),
            title: collection.title,
            featured_product_id: collection.featured_product_id.map(|id| id.to_string()),
            products_count: collection.products_count,
        }
    }
}

/// Absent keeps the current value, `null` clears it.
pub fn into_patch<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(value) => Some(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_distinguish_absent_from_null() {
        let id = Uuid::new_v4();

        assert_eq!(into_patch::<Uuid>(MaybeUndefined::Undefined), None);
        assert_eq!(into_patch::<Uuid>(MaybeUndefined::Null), Some(None));
        assert_eq!(into_patch(MaybeUndefined::Value(id)), Some(Some(id)));
    }
}
