use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::customer::use_cases::get_profile::{
    GetCustomerProfileParams, GetCustomerProfileUseCase,
};
use business::domain::customer::use_cases::update_profile::{
    UpdateCustomerProfileParams, UpdateCustomerProfileUseCase,
};

use crate::api::customer::dto::{CustomerResponse, UpdateCustomerRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CustomerApi {
    get_profile_use_case: Arc<dyn GetCustomerProfileUseCase>,
    update_profile_use_case: Arc<dyn UpdateCustomerProfileUseCase>,
}

impl CustomerApi {
    pub fn new(
        get_profile_use_case: Arc<dyn GetCustomerProfileUseCase>,
        update_profile_use_case: Arc<dyn UpdateCustomerProfileUseCase>,
    ) -> Self {
        Self {
            get_profile_use_case,
            update_profile_use_case,
        }
    }
}

/// Purchasing profile of the authenticated user
///
/// The profile is created with bronze membership on first access.
#[OpenApi]
impl CustomerApi {
    /// Get the current customer profile
    #[oai(path = "/customers/me", method = "get", tag = "ApiTags::Customers")]
    async fn get_profile(&self, auth: JwtBearer) -> GetCustomerResponse {
        let params = GetCustomerProfileParams {
            user_id: auth.0.user_id,
        };

        match self.get_profile_use_case.execute(params).await {
            Ok(customer) => GetCustomerResponse::Ok(Json(customer.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCustomerResponse::InternalError(json)
            }
        }
    }

    /// Replace the current customer profile
    #[oai(path = "/customers/me", method = "put", tag = "ApiTags::Customers")]
    async fn update_profile(
        &self,
        auth: JwtBearer,
        body: Json<UpdateCustomerRequest>,
    ) -> UpdateCustomerResponse {
        let params = UpdateCustomerProfileParams {
            user_id: auth.0.user_id,
            phone: body.0.phone,
            birth_date: body.0.birth_date,
            membership: body.0.membership.into(),
        };

        match self.update_profile_use_case.execute(params).await {
            Ok(customer) => UpdateCustomerResponse::Ok(Json(customer.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCustomerResponse::BadRequest(json),
                    _ => UpdateCustomerResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCustomerResponse {
    #[oai(status = 200)]
    Ok(Json<CustomerResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCustomerResponse {
    #[oai(status = 200)]
    Ok(Json<CustomerResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
