use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::customer::model::{Customer, Membership};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CustomerEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: String,
}

impl CustomerEntity {
    pub fn into_domain(self) -> Customer {
        Customer::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.phone,
            self.birth_date,
            self.membership
                .parse::<Membership>()
                .unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_bronze_for_unknown_membership() {
        let entity = CustomerEntity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            phone: String::new(),
            birth_date: None,
            membership: "platinum".to_string(),
        };

        assert_eq!(entity.into_domain().membership, Membership::Bronze);
    }
}
