use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::customer::model::Customer;
use business::domain::customer::repository::CustomerRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CustomerEntity;
use crate::db::map_sqlx_error;

pub struct CustomerRepositoryPostgres {
    pool: PgPool,
}

impl CustomerRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryPostgres {
    async fn get_or_create(&self, user_id: &UserId) -> Result<Customer, RepositoryError> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let entity = sqlx::query_as::<_, CustomerEntity>(
            r#"INSERT INTO customers (id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id, user_id, phone, birth_date, membership"#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE customers SET phone = $2, birth_date = $3, membership = $4 WHERE id = $1",
        )
        .bind(customer.id)
        .bind(&customer.phone)
        .bind(customer.birth_date)
        .bind(customer.membership.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
