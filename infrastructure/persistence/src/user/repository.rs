use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::db::map_sqlx_error;

const USER_COLUMNS: &str =
    "id, username, email, first_name, last_name, password_hash, is_staff, date_joined";

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {} FROM users WHERE username = $1",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(UserEntity::into_domain))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO users (id, username, email, first_name, last_name, password_hash, is_staff, date_joined)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                username = EXCLUDED.username,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                password_hash = EXCLUDED.password_hash"#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(user.is_staff)
        .bind(user.date_joined)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}
