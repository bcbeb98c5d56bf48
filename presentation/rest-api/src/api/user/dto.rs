use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::User;

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_staff: user.is_staff,
            date_joined: user.date_joined,
        }
    }
}

/// Partial profile update. The email may be sent back unchanged but not modified.
#[derive(Debug, Clone, Object)]
pub struct UpdateMeRequest {
    #[oai(skip_serializing_if_is_none)]
    pub username: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub first_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub last_name: Option<String>,
}
