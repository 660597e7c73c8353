//! Notification publishing

use super::{EventNotifications, Operation};
use crate::error::{Error, Result};
use crate::http::ApiRequest;
use crate::models::{BulkNotificationResponse, NotificationCreate, NotificationResponse};
use crate::types::{DetailedResponse, StringMap};
use crate::validation::RequiredParams;
use serde_json::json;

/// Publish one notification
#[derive(Debug, Clone, Default)]
pub struct SendNotificationsOptions {
    pub instance_id: String,
    pub notification: Option<NotificationCreate>,
    pub headers: StringMap,
}

impl SendNotificationsOptions {
    pub fn new(instance_id: impl Into<String>, notification: NotificationCreate) -> Self {
        Self {
            instance_id: instance_id.into(),
            notification: Some(notification),
            headers: StringMap::new(),
        }
    }
}

impl Operation for SendNotificationsOptions {
    type Output = NotificationResponse;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .some("notification", self.notification.as_ref())
            .check()?;

        let missing = self
            .notification
            .as_ref()
            .map(NotificationCreate::missing_fields)
            .unwrap_or_default();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::missing_parameters(missing))
        }
    }

    fn to_request(&self) -> Result<ApiRequest> {
        let request = ApiRequest::post("/v1/instances/{instance_id}/notifications")
            .path_param("instance_id", self.instance_id.as_str())
            .headers(&self.headers);
        match &self.notification {
            Some(notification) => request.json_body(notification),
            None => Ok(request),
        }
    }
}

/// Publish several notifications in one call
#[derive(Debug, Clone, Default)]
pub struct SendBulkNotificationsOptions {
    pub instance_id: String,
    pub bulk_messages: Vec<NotificationCreate>,
    pub headers: StringMap,
}

impl SendBulkNotificationsOptions {
    pub fn new(instance_id: impl Into<String>, bulk_messages: Vec<NotificationCreate>) -> Self {
        Self {
            instance_id: instance_id.into(),
            bulk_messages,
            headers: StringMap::new(),
        }
    }
}

impl Operation for SendBulkNotificationsOptions {
    type Output = BulkNotificationResponse;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .present("bulk_messages", !self.bulk_messages.is_empty())
            .check()?;

        for (index, message) in self.bulk_messages.iter().enumerate() {
            let missing = message.missing_fields();
            if !missing.is_empty() {
                return Err(Error::invalid_parameter(
                    "bulk_messages",
                    format!("message {index} is missing {}", missing.join(", ")),
                ));
            }
        }
        Ok(())
    }

    fn to_request(&self) -> Result<ApiRequest> {
        Ok(
            ApiRequest::post("/v1/instances/{instance_id}/notifications/bulk")
                .path_param("instance_id", self.instance_id.as_str())
                .json(json!({ "bulk_messages": serde_json::to_value(&self.bulk_messages)? }))
                .headers(&self.headers),
        )
    }
}

impl EventNotifications {
    pub async fn send_notifications(
        &self,
        options: &SendNotificationsOptions,
    ) -> Result<DetailedResponse<NotificationResponse>> {
        self.execute(options).await
    }

    pub async fn send_bulk_notifications(
        &self,
        options: &SendBulkNotificationsOptions,
    ) -> Result<DetailedResponse<BulkNotificationResponse>> {
        self.execute(options).await
    }
}
