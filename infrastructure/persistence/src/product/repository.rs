use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{ProductFilter, ProductOrdering};
use business::domain::shared::pagination::{Page, PageRequest};

use super::entity::ProductEntity;
use crate::db::{escape_like, map_sqlx_error};

const PRODUCT_COLUMNS: &str =
    "id, title, slug, description, unit_price, inventory, collection_id, last_update";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    builder.push(" WHERE TRUE");
    if let Some(collection_id) = filter.collection_id {
        builder.push(" AND collection_id = ").push_bind(collection_id);
    }
    if let Some(gt) = filter.unit_price_gt {
        builder.push(" AND unit_price > ").push_bind(gt);
    }
    if let Some(lt) = filter.unit_price_lt {
        builder.push(" AND unit_price < ").push_bind(lt);
    }
    if let Some(term) = filter.search_term() {
        let pattern = format!("%{}%", escape_like(term));
        builder
            .push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

fn order_clause(ordering: ProductOrdering) -> &'static str {
    // id breaks ties so pages never overlap.
    match ordering {
        ProductOrdering::Title => " ORDER BY title ASC, id ASC",
        ProductOrdering::UnitPriceAsc => " ORDER BY unit_price ASC, id ASC",
        ProductOrdering::UnitPriceDesc => " ORDER BY unit_price DESC, id ASC",
        ProductOrdering::LastUpdateAsc => " ORDER BY last_update ASC, id ASC",
        ProductOrdering::LastUpdateDesc => " ORDER BY last_update DESC, id ASC",
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filters(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let mut select =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM products", PRODUCT_COLUMNS));
        push_filters(&mut select, filter);
        select
            .push(order_clause(filter.ordering))
            .push(" LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let entities = select
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            u64::try_from(total).unwrap_or_default(),
            page,
        ))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, title, slug, description, unit_price, inventory, collection_id, last_update)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                slug = EXCLUDED.slug,
                description = EXCLUDED.description,
                unit_price = EXCLUDED.unit_price,
                inventory = EXCLUDED.inventory,
                collection_id = EXCLUDED.collection_id,
                last_update = EXCLUDED.last_update"#,
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.unit_price)
        .bind(product.inventory)
        .bind(product.collection_id)
        .bind(product.last_update)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn count_order_items(&self, id: Uuid) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM order_items WHERE product_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
