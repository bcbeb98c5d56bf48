use chrono::NaiveDate;
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::customer::model::{Customer, Membership};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum MembershipDto {
    #[oai(rename = "bronze")]
    Bronze,
    #[oai(rename = "silver")]
    Silver,
    #[oai(rename = "gold")]
    Gold,
}

impl From<Membership> for MembershipDto {
    fn from(membership: Membership) -> Self {
        match membership {
            Membership::Bronze => MembershipDto::Bronze,
            Membership::Silver => MembershipDto::Silver,
            Membership::Gold => MembershipDto::Gold,
        }
    }
}

impl From<MembershipDto> for Membership {
    fn from(dto: MembershipDto) -> Self {
        match dto {
            MembershipDto::Bronze => Membership::Bronze,
            MembershipDto::Silver => Membership::Silver,
            MembershipDto::Gold => Membership::Gold,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CustomerResponse {
    pub id: String,
    pub user_id: String,
    pub phone: String,
    #[oai(skip_serializing_if_is_none)]
    pub birth_date: Option<NaiveDate>,
    pub membership: MembershipDto,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            user_id: customer.user_id.to_string(),
            phone: customer.phone,
            birth_date: customer.birth_date,
            membership: customer.membership.into(),
        }
    }
}

/// Full replacement of the purchasing profile
#[derive(Debug, Clone, Object)]
pub struct UpdateCustomerRequest {
    /// Up to 255 characters, may be empty
    #[oai(default)]
    pub phone: String,
    #[oai(skip_serializing_if_is_none)]
    pub birth_date: Option<NaiveDate>,
    pub membership: MembershipDto,
}
