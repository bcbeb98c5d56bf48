use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(
            UserId::new(self.id),
            self.username,
            self.email,
            self.first_name,
            self.last_name,
            self.password_hash,
            self.is_staff,
            self.date_joined,
        )
    }
}
