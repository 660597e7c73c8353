//! Destination and tag subscription operations
//!
//! Destinations are created and updated with multipart/form-data so that
//! certificates and push icons can travel alongside the JSON config.

use super::{EventNotifications, Operation};
use crate::error::Result;
use crate::http::{ApiRequest, FormPart};
use crate::models::{
    Destination, DestinationConfig, DestinationList, DestinationListItem, DestinationResponse,
    DestinationType, EnabledCountries, TagsSubscriptionList, TagsSubscriptionListItem,
    TagsSubscriptionResponse, TestDestinationResponse, VerificationResponse,
};
use crate::pagination::ListOperation;
use crate::types::{DetailedResponse, NoContent, StringMap};
use crate::validation::RequiredParams;
use bytes::Bytes;
use serde::Serialize;
use std::collections::BTreeMap;

/// Binary file sent as a multipart part
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub data: Bytes,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl Attachment {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            filename: None,
            content_type: None,
        }
    }

    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    fn to_part(&self, name: &str) -> FormPart {
        FormPart::file(
            name,
            self.data.clone(),
            self.filename.clone(),
            self.content_type.clone(),
        )
    }
}

/// Form fields shared by create and update
#[derive(Debug)]
struct DestinationForm<'a> {
    name: Option<&'a str>,
    destination_type: Option<&'a DestinationType>,
    description: Option<&'a str>,
    collect_failed_events: Option<bool>,
    config: Option<&'a DestinationConfig>,
    certificate: Option<&'a Attachment>,
    icons: &'a BTreeMap<String, Attachment>,
}

impl DestinationForm<'_> {
    fn into_parts(self) -> Result<Vec<FormPart>> {
        let mut parts = Vec::new();
        if let Some(name) = self.name {
            parts.push(FormPart::text("name", name));
        }
        if let Some(kind) = self.destination_type {
            parts.push(FormPart::text("type", kind.as_str()));
        }
        if let Some(description) = self.description {
            parts.push(FormPart::text("description", description));
        }
        if let Some(collect) = self.collect_failed_events {
            parts.push(FormPart::text("collect_failed_events", collect.to_string()));
        }
        if let Some(config) = self.config {
            parts.push(FormPart::json("config", config)?);
        }
        if let Some(certificate) = self.certificate {
            parts.push(certificate.to_part("certificate"));
        }
        for (field, icon) in self.icons {
            parts.push(icon.to_part(field));
        }
        Ok(parts)
    }
}

/// Create a destination
///
/// `icons` maps form field names (`icon_chrome`, `icon_16x16`, ...) to files
/// and is only meaningful for web push destinations.
#[derive(Debug, Clone, Default)]
pub struct CreateDestinationOptions {
    pub instance_id: String,
    pub name: String,
    pub destination_type: Option<DestinationType>,
    pub description: Option<String>,
    pub collect_failed_events: Option<bool>,
    pub config: Option<DestinationConfig>,
    /// APNs certificate for `push_ios`
    pub certificate: Option<Attachment>,
    pub icons: BTreeMap<String, Attachment>,
    pub headers: StringMap,
}

impl CreateDestinationOptions {
    pub fn new(
        instance_id: impl Into<String>,
        name: impl Into<String>,
        destination_type: DestinationType,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            name: name.into(),
            destination_type: Some(destination_type),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn config(mut self, config: DestinationConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn icon(mut self, field: impl Into<String>, icon: Attachment) -> Self {
        self.icons.insert(field.into(), icon);
        self
    }
}

impl Operation for CreateDestinationOptions {
    type Output = DestinationResponse;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("name", &self.name)
            .some("type", self.destination_type.as_ref())
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        let parts = DestinationForm {
            name: Some(&self.name),
            destination_type: self.destination_type.as_ref(),
            description: self.description.as_deref(),
            collect_failed_events: self.collect_failed_events,
            config: self.config.as_ref(),
            certificate: self.certificate.as_ref(),
            icons: &self.icons,
        }
        .into_parts()?;

        Ok(ApiRequest::post("/v1/instances/{instance_id}/destinations")
            .path_param("instance_id", self.instance_id.as_str())
            .multipart(parts)
            .headers(&self.headers))
    }
}

/// Update a destination; only set fields are sent
#[derive(Debug, Clone, Default)]
pub struct UpdateDestinationOptions {
    pub instance_id: String,
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub collect_failed_events: Option<bool>,
    pub config: Option<DestinationConfig>,
    pub certificate: Option<Attachment>,
    pub icons: BTreeMap<String, Attachment>,
    pub headers: StringMap,
}

impl UpdateDestinationOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for UpdateDestinationOptions {
    type Output = Destination;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        let parts = DestinationForm {
            name: self.name.as_deref(),
            destination_type: None,
            description: self.description.as_deref(),
            collect_failed_events: self.collect_failed_events,
            config: self.config.as_ref(),
            certificate: self.certificate.as_ref(),
            icons: &self.icons,
        }
        .into_parts()?;

        Ok(
            ApiRequest::patch("/v1/instances/{instance_id}/destinations/{id}")
                .path_param("instance_id", self.instance_id.as_str())
                .path_param("id", self.id.as_str())
                .multipart(parts)
                .headers(&self.headers),
        )
    }
}

list_options!(
    /// List destinations
    ListDestinationsOptions,
    "/v1/instances/{instance_id}/destinations",
    DestinationList,
    DestinationListItem,
    "destinations"
);

by_id_options!(
    GetDestinationOptions,
    get,
    "/v1/instances/{instance_id}/destinations/{id}",
    Destination
);

by_id_options!(
    DeleteDestinationOptions,
    delete,
    "/v1/instances/{instance_id}/destinations/{id}",
    NoContent
);

by_id_options!(
    /// Countries an SMS destination can reach
    GetEnabledCountriesOptions,
    get,
    "/v1/instances/{instance_id}/destinations/{id}/enabled_countries",
    EnabledCountries
);

by_id_options!(
    /// Send a test notification through a destination
    TestDestinationOptions,
    post,
    "/v1/instances/{instance_id}/destinations/{id}/test",
    TestDestinationResponse
);

/// Check DNS verification records of a custom email destination
#[derive(Debug, Clone, Default)]
pub struct UpdateVerifyDestinationOptions {
    pub instance_id: String,
    pub id: String,
    /// Record kind to verify (`dkim`, `spf`, `cname`)
    pub verification_type: String,
    pub headers: StringMap,
}

impl UpdateVerifyDestinationOptions {
    pub fn new(
        instance_id: impl Into<String>,
        id: impl Into<String>,
        verification_type: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            verification_type: verification_type.into(),
            headers: StringMap::new(),
        }
    }
}

impl Operation for UpdateVerifyDestinationOptions {
    type Output = VerificationResponse;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .text("type", &self.verification_type)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        Ok(
            ApiRequest::patch("/v1/instances/{instance_id}/destinations/{id}/verify")
                .path_param("instance_id", self.instance_id.as_str())
                .path_param("id", self.id.as_str())
                .query("type", &self.verification_type)
                .headers(&self.headers),
        )
    }
}

// ============================================================================
// Tag Subscriptions
// ============================================================================

/// Subscribe a push device to a tag
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTagsSubscriptionOptions {
    #[serde(skip)]
    pub instance_id: String,
    /// Destination id
    #[serde(skip)]
    pub id: String,
    pub device_id: String,
    pub tag_name: String,
    #[serde(skip)]
    pub headers: StringMap,
}

impl CreateTagsSubscriptionOptions {
    pub fn new(
        instance_id: impl Into<String>,
        id: impl Into<String>,
        device_id: impl Into<String>,
        tag_name: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            device_id: device_id.into(),
            tag_name: tag_name.into(),
            headers: StringMap::new(),
        }
    }
}

impl Operation for CreateTagsSubscriptionOptions {
    type Output = TagsSubscriptionResponse;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .text("device_id", &self.device_id)
            .text("tag_name", &self.tag_name)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::post("/v1/instances/{instance_id}/destinations/{id}/tag_subscriptions")
            .path_param("instance_id", self.instance_id.as_str())
            .path_param("id", self.id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

/// List tag subscriptions of a destination
#[derive(Debug, Clone, Default)]
pub struct ListTagsSubscriptionOptions {
    pub instance_id: String,
    /// Destination id
    pub id: String,
    pub device_id: Option<String>,
    pub user_id: Option<String>,
    pub tag_name: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub search: Option<String>,
    pub headers: StringMap,
}

impl ListTagsSubscriptionOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for ListTagsSubscriptionOptions {
    type Output = TagsSubscriptionList;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        Ok(
            ApiRequest::get("/v1/instances/{instance_id}/destinations/{id}/tag_subscriptions")
                .path_param("instance_id", self.instance_id.as_str())
                .path_param("id", self.id.as_str())
                .query_opt("device_id", self.device_id.as_deref())
                .query_opt("user_id", self.user_id.as_deref())
                .query_opt("tag_name", self.tag_name.as_deref())
                .query_opt("limit", self.limit)
                .query_opt("offset", self.offset)
                .query_opt("search", self.search.as_deref())
                .headers(&self.headers),
        )
    }
}

impl ListOperation for ListTagsSubscriptionOptions {
    type Item = TagsSubscriptionListItem;
    const ITEMS_FIELD: &'static str = "tag_subscriptions";
}

/// Remove a device's tag subscription
#[derive(Debug, Clone, Default)]
pub struct DeleteTagsSubscriptionOptions {
    pub instance_id: String,
    /// Destination id
    pub id: String,
    pub device_id: Option<String>,
    pub tag_name: Option<String>,
    pub headers: StringMap,
}

impl DeleteTagsSubscriptionOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for DeleteTagsSubscriptionOptions {
    type Output = NoContent;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        Ok(
            ApiRequest::delete("/v1/instances/{instance_id}/destinations/{id}/tag_subscriptions")
                .path_param("instance_id", self.instance_id.as_str())
                .path_param("id", self.id.as_str())
                .query_opt("device_id", self.device_id.as_deref())
                .query_opt("tag_name", self.tag_name.as_deref())
                .headers(&self.headers),
        )
    }
}

impl EventNotifications {
    pub async fn create_destination(
        &self,
        options: &CreateDestinationOptions,
    ) -> Result<DetailedResponse<DestinationResponse>> {
        self.execute(options).await
    }

    pub async fn list_destinations(
        &self,
        options: &ListDestinationsOptions,
    ) -> Result<DetailedResponse<DestinationList>> {
        self.execute(options).await
    }

    pub async fn get_destination(
        &self,
        options: &GetDestinationOptions,
    ) -> Result<DetailedResponse<Destination>> {
        self.execute(options).await
    }

    pub async fn update_destination(
        &self,
        options: &UpdateDestinationOptions,
    ) -> Result<DetailedResponse<Destination>> {
        self.execute(options).await
    }

    pub async fn delete_destination(
        &self,
        options: &DeleteDestinationOptions,
    ) -> Result<DetailedResponse<NoContent>> {
        self.execute(options).await
    }

    pub async fn get_enabled_countries(
        &self,
        options: &GetEnabledCountriesOptions,
    ) -> Result<DetailedResponse<EnabledCountries>> {
        self.execute(options).await
    }

    pub async fn test_destination(
        &self,
        options: &TestDestinationOptions,
    ) -> Result<DetailedResponse<TestDestinationResponse>> {
        self.execute(options).await
    }

    pub async fn update_verify_destination(
        &self,
        options: &UpdateVerifyDestinationOptions,
    ) -> Result<DetailedResponse<VerificationResponse>> {
        self.execute(options).await
    }

    pub async fn create_tags_subscription(
        &self,
        options: &CreateTagsSubscriptionOptions,
    ) -> Result<DetailedResponse<TagsSubscriptionResponse>> {
        self.execute(options).await
    }

    pub async fn list_tags_subscription(
        &self,
        options: &ListTagsSubscriptionOptions,
    ) -> Result<DetailedResponse<TagsSubscriptionList>> {
        self.execute(options).await
    }

    pub async fn delete_tags_subscription(
        &self,
        options: &DeleteTagsSubscriptionOptions,
    ) -> Result<DetailedResponse<NoContent>> {
        self.execute(options).await
    }
}
