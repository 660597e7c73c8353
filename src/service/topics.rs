//! Topic operations

use super::{EventNotifications, Operation};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::models::{SourcesItems, Topic, TopicList, TopicResponse, TopicsListItem};
use crate::types::{DetailedResponse, NoContent, StringMap};
use crate::validation::RequiredParams;
use serde::Serialize;

/// Create a topic that groups sources and their filter rules
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTopicOptions {
    #[serde(skip)]
    pub instance_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourcesItems>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl CreateTopicOptions {
    pub fn new(instance_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn source(mut self, source: SourcesItems) -> Self {
        self.sources.push(source);
        self
    }
}

impl Operation for CreateTopicOptions {
    type Output = TopicResponse;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("name", &self.name)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::post("/v1/instances/{instance_id}/topics")
            .path_param("instance_id", self.instance_id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

list_options!(
    /// List topics
    ListTopicsOptions,
    "/v1/instances/{instance_id}/topics",
    TopicList,
    TopicsListItem,
    "topics"
);

/// Fetch a topic
#[derive(Debug, Clone, Default)]
pub struct GetTopicOptions {
    pub instance_id: String,
    pub id: String,
    /// Extra detail to embed, e.g. `subscriptions`
    pub include: Option<String>,
    pub headers: StringMap,
}

impl GetTopicOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for GetTopicOptions {
    type Output = Topic;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::get("/v1/instances/{instance_id}/topics/{id}")
            .path_param("instance_id", self.instance_id.as_str())
            .path_param("id", self.id.as_str())
            .query_opt("include", self.include.as_deref())
            .headers(&self.headers))
    }
}

/// Replace a topic's name, description and source bindings
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplaceTopicOptions {
    #[serde(skip)]
    pub instance_id: String,
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourcesItems>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl ReplaceTopicOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for ReplaceTopicOptions {
    type Output = Topic;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::put("/v1/instances/{instance_id}/topics/{id}")
            .path_param("instance_id", self.instance_id.as_str())
            .path_param("id", self.id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

by_id_options!(
    /// Delete a topic
    DeleteTopicOptions,
    delete,
    "/v1/instances/{instance_id}/topics/{id}",
    NoContent
);

impl EventNotifications {
    pub async fn create_topic(
        &self,
        options: &CreateTopicOptions,
    ) -> Result<DetailedResponse<TopicResponse>> {
        self.execute(options).await
    }

    pub async fn list_topics(
        &self,
        options: &ListTopicsOptions,
    ) -> Result<DetailedResponse<TopicList>> {
        self.execute(options).await
    }

    pub async fn get_topic(&self, options: &GetTopicOptions) -> Result<DetailedResponse<Topic>> {
        self.execute(options).await
    }

    pub async fn replace_topic(
        &self,
        options: &ReplaceTopicOptions,
    ) -> Result<DetailedResponse<Topic>> {
        self.execute(options).await
    }

    pub async fn delete_topic(
        &self,
        options: &DeleteTopicOptions,
    ) -> Result<DetailedResponse<NoContent>> {
        self.execute(options).await
    }
}
