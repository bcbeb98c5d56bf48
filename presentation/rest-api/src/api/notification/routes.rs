use std::sync::Arc;

use chrono::{DateTime, Utc};
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::notification::use_cases::create::{
    CreateNotificationParams, CreateNotificationUseCase,
};
use business::domain::notification::use_cases::delete::{
    DeleteNotificationParams, DeleteNotificationUseCase,
};
use business::domain::notification::use_cases::get_all::{
    GetNotificationsParams, GetNotificationsUseCase,
};
use business::domain::notification::use_cases::mark_read::{
    MarkNotificationReadParams, MarkNotificationReadUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::notification::dto::{CreateNotificationRequest, NotificationResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct NotificationApi {
    get_all_use_case: Arc<dyn GetNotificationsUseCase>,
    create_use_case: Arc<dyn CreateNotificationUseCase>,
    mark_read_use_case: Arc<dyn MarkNotificationReadUseCase>,
    delete_use_case: Arc<dyn DeleteNotificationUseCase>,
}

impl NotificationApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetNotificationsUseCase>,
        create_use_case: Arc<dyn CreateNotificationUseCase>,
        mark_read_use_case: Arc<dyn MarkNotificationReadUseCase>,
        delete_use_case: Arc<dyn DeleteNotificationUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            create_use_case,
            mark_read_use_case,
            delete_use_case,
        }
    }
}

#[OpenApi]
impl NotificationApi {
    /// List the caller's notifications, newest first
    ///
    /// With `since`, only notifications created after that instant are returned.
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn get_notifications(
        &self,
        auth: JwtBearer,
        since: Query<Option<DateTime<Utc>>>,
    ) -> GetNotificationsResponse {
        let params = GetNotificationsParams {
            principal: auth.0,
            since: since.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(notifications) => GetNotificationsResponse::Ok(Json(
                notifications.into_iter().map(|n| n.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetNotificationsResponse::InternalError(json)
            }
        }
    }

    /// Send a notification to a user
    #[oai(path = "/notifications", method = "post", tag = "ApiTags::Notifications")]
    async fn create_notification(
        &self,
        auth: JwtBearer,
        body: Json<CreateNotificationRequest>,
    ) -> CreateNotificationResponse {
        let params = CreateNotificationParams {
            principal: auth.0,
            user_id: UserId::new(body.0.user_id),
            message: body.0.message,
        };

        match self.create_use_case.execute(params).await {
            Ok(notification) => CreateNotificationResponse::Created(Json(notification.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateNotificationResponse::BadRequest(json),
                    403 => CreateNotificationResponse::Forbidden(json),
                    _ => CreateNotificationResponse::InternalError(json),
                }
            }
        }
    }

    /// Mark one of the caller's notifications as read
    #[oai(
        path = "/notifications/:id",
        method = "patch",
        tag = "ApiTags::Notifications"
    )]
    async fn mark_notification_read(
        &self,
        auth: JwtBearer,
        id: Path<String>,
    ) -> MarkNotificationReadResponse {
        let id = match parse_id(&id.0, "notification.invalid_id") {
            Ok(id) => id,
            Err(json) => return MarkNotificationReadResponse::BadRequest(json),
        };

        let params = MarkNotificationReadParams {
            id,
            principal: auth.0,
        };

        match self.mark_read_use_case.execute(params).await {
            Ok(notification) => MarkNotificationReadResponse::Ok(Json(notification.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => MarkNotificationReadResponse::NotFound(json),
                    _ => MarkNotificationReadResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a notification
    #[oai(
        path = "/notifications/:id",
        method = "delete",
        tag = "ApiTags::Notifications"
    )]
    async fn delete_notification(
        &self,
        auth: JwtBearer,
        id: Path<String>,
    ) -> DeleteNotificationResponse {
        let id = match parse_id(&id.0, "notification.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteNotificationResponse::BadRequest(json),
        };

        let params = DeleteNotificationParams {
            id,
            principal: auth.0,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteNotificationResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteNotificationResponse::Forbidden(json),
                    404 => DeleteNotificationResponse::NotFound(json),
                    _ => DeleteNotificationResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetNotificationsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<NotificationResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateNotificationResponse {
    #[oai(status = 201)]
    Created(Json<NotificationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MarkNotificationReadResponse {
    #[oai(status = 200)]
    Ok(Json<NotificationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteNotificationResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
