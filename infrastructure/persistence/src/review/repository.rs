use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::review::model::Review;
use business::domain::review::repository::ReviewRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::ReviewEntity;
use crate::db::map_sqlx_error;

pub struct ReviewRepositoryPostgres {
    pool: PgPool,
}

impl ReviewRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Review>, RepositoryError> {
        let entities = sqlx::query_as::<_, ReviewEntity>(
            "SELECT id, product_id, user_id, name, description, date FROM reviews WHERE product_id = $1 ORDER BY date DESC, id",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, product_id: Uuid, id: Uuid) -> Result<Review, RepositoryError> {
        let entity = sqlx::query_as::<_, ReviewEntity>(
            "SELECT id, product_id, user_id, name, description, date FROM reviews WHERE id = $1 AND product_id = $2",
        )
        .bind(id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn exists_for(
        &self,
        product_id: Uuid,
        user_id: &UserId,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM reviews WHERE product_id = $1 AND user_id = $2)",
        )
        .bind(product_id)
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn save(&self, review: &Review) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO reviews (id, product_id, user_id, name, description, date)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(review.id)
        .bind(review.product_id)
        .bind(review.user_id.as_uuid())
        .bind(&review.name)
        .bind(&review.description)
        .bind(review.date)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
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
