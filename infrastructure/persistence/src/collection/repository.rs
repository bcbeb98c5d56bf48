use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::collection::model::Collection;
use business::domain::collection::repository::CollectionRepository;
use business::domain::errors::RepositoryError;

use super::entity::CollectionEntity;
use crate::db::map_sqlx_error;

const SELECT_WITH_COUNT: &str = r#"SELECT c.id, c.title, c.featured_product_id, COUNT(p.id) AS products_count
    FROM collections c
    LEFT JOIN products p ON p.collection_id = c.id"#;

pub struct CollectionRepositoryPostgres {
    pool: PgPool,
}

impl CollectionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository for CollectionRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Collection>, RepositoryError> {
        let entities = sqlx::query_as::<_, CollectionEntity>(&format!(
            "{} GROUP BY c.id ORDER BY c.title",
            SELECT_WITH_COUNT
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Collection, RepositoryError> {
        let entity = sqlx::query_as::<_, CollectionEntity>(&format!(
            "{} WHERE c.id = $1 GROUP BY c.id",
            SELECT_WITH_COUNT
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, collection: &Collection) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO collections (id, title, featured_product_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                featured_product_id = EXCLUDED.featured_product_id"#,
        )
        .bind(collection.id)
        .bind(&collection.title)
        .bind(collection.featured_product_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM collections WHERE id = $1")
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
