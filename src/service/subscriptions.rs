//! Subscription operations

use super::{EventNotifications, Operation};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::models::{Subscription, SubscriptionList, SubscriptionListItem};
use crate::types::{DetailedResponse, JsonObject, NoContent, StringMap};
use crate::validation::RequiredParams;
use serde::Serialize;

/// Route a topic's notifications to a destination
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSubscriptionOptions {
    #[serde(skip)]
    pub instance_id: String,
    pub name: String,
    pub destination_id: String,
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Destination-specific settings such as recipients or templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<JsonObject>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl CreateSubscriptionOptions {
    pub fn new(
        instance_id: impl Into<String>,
        name: impl Into<String>,
        destination_id: impl Into<String>,
        topic_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            name: name.into(),
            destination_id: destination_id.into(),
            topic_id: topic_id.into(),
            ..Default::default()
        }
    }
}

impl Operation for CreateSubscriptionOptions {
    type Output = Subscription;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("name", &self.name)
            .text("destination_id", &self.destination_id)
            .text("topic_id", &self.topic_id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::post("/v1/instances/{instance_id}/subscriptions")
            .path_param("instance_id", self.instance_id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

list_options!(
    /// List subscriptions
    ListSubscriptionsOptions,
    "/v1/instances/{instance_id}/subscriptions",
    SubscriptionList,
    SubscriptionListItem,
    "subscriptions"
);

by_id_options!(
    GetSubscriptionOptions,
    get,
    "/v1/instances/{instance_id}/subscriptions/{id}",
    Subscription
);

by_id_options!(
    DeleteSubscriptionOptions,
    delete,
    "/v1/instances/{instance_id}/subscriptions/{id}",
    NoContent
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSubscriptionOptions {
    #[serde(skip)]
    pub instance_id: String,
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<JsonObject>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl UpdateSubscriptionOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for UpdateSubscriptionOptions {
    type Output = Subscription;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::patch("/v1/instances/{instance_id}/subscriptions/{id}")
            .path_param("instance_id", self.instance_id.as_str())
            .path_param("id", self.id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

impl EventNotifications {
    pub async fn create_subscription(
        &self,
        options: &CreateSubscriptionOptions,
    ) -> Result<DetailedResponse<Subscription>> {
        self.execute(options).await
    }

    pub async fn list_subscriptions(
        &self,
        options: &ListSubscriptionsOptions,
    ) -> Result<DetailedResponse<SubscriptionList>> {
        self.execute(options).await
    }

    pub async fn get_subscription(
        &self,
        options: &GetSubscriptionOptions,
    ) -> Result<DetailedResponse<Subscription>> {
        self.execute(options).await
    }

    pub async fn update_subscription(
        &self,
        options: &UpdateSubscriptionOptions,
    ) -> Result<DetailedResponse<Subscription>> {
        self.execute(options).await
    }

    pub async fn delete_subscription(
        &self,
        options: &DeleteSubscriptionOptions,
    ) -> Result<DetailedResponse<NoContent>> {
        self.execute(options).await
    }
}
