use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::refresh::{RefreshTokenParams, RefreshTokenUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::auth::dto::{
    AccessTokenResponse, LoginRequest, RefreshRequest, RegisterRequest, TokenPairResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::user::dto::UserResponse;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    refresh_use_case: Arc<dyn RefreshTokenUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        refresh_use_case: Arc<dyn RefreshTokenUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            refresh_use_case,
        }
    }
}

/// Registration and token issuance
#[OpenApi]
impl AuthApi {
    /// Register a new account
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterUserParams {
            username: body.0.username,
            email: body.0.email,
            password: body.0.password,
            password_confirmation: body.0.password_confirmation,
            first_name: body.0.first_name,
            last_name: body.0.last_name,
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => RegisterResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    409 => RegisterResponse::Conflict(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Obtain an access and refresh token pair
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            username: body.0.username,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(pair) => LoginResponse::Ok(Json(pair.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Exchange a refresh token for a new access token
    #[oai(path = "/auth/refresh", method = "post", tag = "ApiTags::Auth")]
    async fn refresh(&self, body: Json<RefreshRequest>) -> RefreshResponse {
        let params = RefreshTokenParams {
            refresh_token: body.0.refresh,
        };

        match self.refresh_use_case.execute(params).await {
            Ok(access) => RefreshResponse::Ok(Json(AccessTokenResponse { access })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => RefreshResponse::Unauthorized(json),
                    _ => RefreshResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<TokenPairResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RefreshResponse {
    #[oai(status = 200)]
    Ok(Json<AccessTokenResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
