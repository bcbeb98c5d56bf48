use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::get_me::{GetMeParams, GetMeUseCase};
use business::domain::user::use_cases::update_me::{UpdateMeParams, UpdateMeUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;
use crate::api::user::dto::{UpdateMeRequest, UserResponse};

pub struct UserApi {
    get_me_use_case: Arc<dyn GetMeUseCase>,
    update_me_use_case: Arc<dyn UpdateMeUseCase>,
}

impl UserApi {
    pub fn new(
        get_me_use_case: Arc<dyn GetMeUseCase>,
        update_me_use_case: Arc<dyn UpdateMeUseCase>,
    ) -> Self {
        Self {
            get_me_use_case,
            update_me_use_case,
        }
    }
}

/// Account of the authenticated user
#[OpenApi]
impl UserApi {
    /// Get the current user
    #[oai(path = "/users/me", method = "get", tag = "ApiTags::Users")]
    async fn get_me(&self, auth: JwtBearer) -> GetMeResponse {
        let params = GetMeParams {
            user_id: auth.0.user_id,
        };

        match self.get_me_use_case.execute(params).await {
            Ok(user) => GetMeResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetMeResponse::NotFound(json),
                    _ => GetMeResponse::InternalError(json),
                }
            }
        }
    }

    /// Update the current user
    ///
    /// Username, first and last name may change. The email is read-only.
    #[oai(path = "/users/me", method = "patch", tag = "ApiTags::Users")]
    async fn update_me(&self, auth: JwtBearer, body: Json<UpdateMeRequest>) -> UpdateMeResponse {
        let params = UpdateMeParams {
            user_id: auth.0.user_id,
            username: body.0.username,
            email: body.0.email,
            first_name: body.0.first_name,
            last_name: body.0.last_name,
        };

        match self.update_me_use_case.execute(params).await {
            Ok(user) => UpdateMeResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateMeResponse::BadRequest(json),
                    404 => UpdateMeResponse::NotFound(json),
                    409 => UpdateMeResponse::Conflict(json),
                    _ => UpdateMeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMeResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateMeResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
