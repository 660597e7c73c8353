//! Source operations

use super::{EventNotifications, Operation};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::models::{Source, SourceList, SourceListItem, SourceResponse};
use crate::types::{DetailedResponse, NoContent, StringMap};
use crate::validation::RequiredParams;
use serde::Serialize;

/// Register an API source that can publish notifications
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSourcesOptions {
    #[serde(skip)]
    pub instance_id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl CreateSourcesOptions {
    pub fn new(
        instance_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

impl Operation for CreateSourcesOptions {
    type Output = SourceResponse;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("name", &self.name)
            .text("description", &self.description)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::post("/v1/instances/{instance_id}/sources")
            .path_param("instance_id", self.instance_id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

list_options!(
    /// List sources
    ListSourcesOptions,
    "/v1/instances/{instance_id}/sources",
    SourceList,
    SourceListItem,
    "sources"
);

by_id_options!(
    /// Fetch a source
    GetSourceOptions,
    get,
    "/v1/instances/{instance_id}/sources/{id}",
    Source
);

by_id_options!(
    /// Delete a source
    DeleteSourceOptions,
    delete,
    "/v1/instances/{instance_id}/sources/{id}",
    NoContent
);

/// Rename, describe or toggle a source; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSourceOptions {
    #[serde(skip)]
    pub instance_id: String,
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl UpdateSourceOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for UpdateSourceOptions {
    type Output = Source;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::patch("/v1/instances/{instance_id}/sources/{id}")
            .path_param("instance_id", self.instance_id.as_str())
            .path_param("id", self.id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

impl EventNotifications {
    pub async fn create_sources(
        &self,
        options: &CreateSourcesOptions,
    ) -> Result<DetailedResponse<SourceResponse>> {
        self.execute(options).await
    }

    /// One page of sources; use [`EventNotifications::pager`] to walk all pages
    pub async fn list_sources(
        &self,
        options: &ListSourcesOptions,
    ) -> Result<DetailedResponse<SourceList>> {
        self.execute(options).await
    }

    pub async fn get_source(&self, options: &GetSourceOptions) -> Result<DetailedResponse<Source>> {
        self.execute(options).await
    }

    pub async fn update_source(
        &self,
        options: &UpdateSourceOptions,
    ) -> Result<DetailedResponse<Source>> {
        self.execute(options).await
    }

    pub async fn delete_source(
        &self,
        options: &DeleteSourceOptions,
    ) -> Result<DetailedResponse<NoContent>> {
        self.execute(options).await
    }
}
