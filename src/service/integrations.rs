//! Integration operations (key protection and failed-event storage)

use super::{EventNotifications, Operation};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::models::{Integration, IntegrationList, IntegrationMetadata};
use crate::types::{DetailedResponse, StringMap};
use crate::validation::RequiredParams;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateIntegrationOptions {
    #[serde(skip)]
    pub instance_id: String,
    /// `kms`, `hs-crypto` or `collect_failed_events`
    #[serde(rename = "type")]
    pub integration_type: String,
    pub metadata: Option<IntegrationMetadata>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl CreateIntegrationOptions {
    pub fn new(
        instance_id: impl Into<String>,
        integration_type: impl Into<String>,
        metadata: IntegrationMetadata,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            integration_type: integration_type.into(),
            metadata: Some(metadata),
            headers: StringMap::new(),
        }
    }
}

impl Operation for CreateIntegrationOptions {
    type Output = Integration;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("type", &self.integration_type)
            .some("metadata", self.metadata.as_ref())
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::post("/v1/instances/{instance_id}/integrations")
            .path_param("instance_id", self.instance_id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

list_options!(
    /// List integrations
    ListIntegrationsOptions,
    "/v1/instances/{instance_id}/integrations",
    IntegrationList,
    Integration,
    "integrations"
);

by_id_options!(
    GetIntegrationOptions,
    get,
    "/v1/instances/{instance_id}/integrations/{id}",
    Integration
);

/// Point an integration at a different key or bucket
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplaceIntegrationOptions {
    #[serde(skip)]
    pub instance_id: String,
    #[serde(skip)]
    pub id: String,
    #[serde(rename = "type")]
    pub integration_type: String,
    pub metadata: Option<IntegrationMetadata>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl ReplaceIntegrationOptions {
    pub fn new(
        instance_id: impl Into<String>,
        id: impl Into<String>,
        integration_type: impl Into<String>,
        metadata: IntegrationMetadata,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            integration_type: integration_type.into(),
            metadata: Some(metadata),
            headers: StringMap::new(),
        }
    }
}

impl Operation for ReplaceIntegrationOptions {
    type Output = Integration;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .text("type", &self.integration_type)
            .some("metadata", self.metadata.as_ref())
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::put("/v1/instances/{instance_id}/integrations/{id}")
            .path_param("instance_id", self.instance_id.as_str())
            .path_param("id", self.id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

impl EventNotifications {
    pub async fn create_integration(
        &self,
        options: &CreateIntegrationOptions,
    ) -> Result<DetailedResponse<Integration>> {
        self.execute(options).await
    }

    pub async fn list_integrations(
        &self,
        options: &ListIntegrationsOptions,
    ) -> Result<DetailedResponse<IntegrationList>> {
        self.execute(options).await
    }

    pub async fn get_integration(
        &self,
        options: &GetIntegrationOptions,
    ) -> Result<DetailedResponse<Integration>> {
        self.execute(options).await
    }

    pub async fn replace_integration(
        &self,
        options: &ReplaceIntegrationOptions,
    ) -> Result<DetailedResponse<Integration>> {
        self.execute(options).await
    }
}
