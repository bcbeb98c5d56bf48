use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::CustomerError;
use crate::domain::shared::value_objects::UserId;

pub const MAX_PHONE_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    #[default]
    Bronze,
    Silver,
    Gold,
}

impl std::fmt::Display for Membership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Membership::Bronze => write!(f, "bronze"),
            Membership::Silver => write!(f, "silver"),
            Membership::Gold => write!(f, "gold"),
        }
    }
}

impl std::str::FromStr for Membership {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bronze" => Ok(Membership::Bronze),
            "silver" => Ok(Membership::Silver),
            "gold" => Ok(Membership::Gold),
            _ => Err(format!("Invalid membership: {}", s)),
        }
    }
}

/// Purchasing profile of a user. Orders belong to customers.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: Uuid,
    pub user_id: UserId,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: Membership,
}

impl Customer {
    /// Blank bronze profile created on first access.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            phone: String::new(),
            birth_date: None,
            membership: Membership::default(),
        }
    }

    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        phone: String,
        birth_date: Option<NaiveDate>,
        membership: Membership,
    ) -> Self {
        Self {
            id,
            user_id,
            phone,
            birth_date,
            membership,
        }
    }

    pub fn update(
        &mut self,
        phone: String,
        birth_date: Option<NaiveDate>,
        membership: Membership,
    ) -> Result<(), CustomerError> {
        let phone = phone.trim().to_string();
        if phone.chars().count() > MAX_PHONE_LENGTH {
            return Err(CustomerError::PhoneTooLong);
        }
        if birth_date.is_some_and(|date| date > Utc::now().date_naive()) {
            return Err(CustomerError::BirthDateInFuture);
        }
        self.phone = phone;
        self.birth_date = birth_date;
        self.membership = membership;
        Ok(())
    }
}
