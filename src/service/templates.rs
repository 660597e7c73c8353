//! Template operations

use super::{EventNotifications, Operation};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::models::{Template, TemplateConfig, TemplateList, TemplateResponse};
use crate::types::{DetailedResponse, NoContent, StringMap};
use crate::validation::RequiredParams;
use serde::Serialize;

/// Create a notification template
///
/// `template_type` names the channel and purpose, e.g.
/// `smtp_custom.notification` or `slack.notification`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTemplateOptions {
    #[serde(skip)]
    pub instance_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: String,
    pub params: Option<TemplateConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl CreateTemplateOptions {
    pub fn new(
        instance_id: impl Into<String>,
        name: impl Into<String>,
        template_type: impl Into<String>,
        params: TemplateConfig,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            name: name.into(),
            template_type: template_type.into(),
            params: Some(params),
            ..Default::default()
        }
    }
}

impl Operation for CreateTemplateOptions {
    type Output = TemplateResponse;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("name", &self.name)
            .text("type", &self.template_type)
            .some("params", self.params.as_ref())
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::post("/v1/instances/{instance_id}/templates")
            .path_param("instance_id", self.instance_id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

list_options!(
    /// List templates
    ListTemplatesOptions,
    "/v1/instances/{instance_id}/templates",
    TemplateList,
    Template,
    "templates"
);

by_id_options!(
    /// Fetch a template
    GetTemplateOptions,
    get,
    "/v1/instances/{instance_id}/templates/{id}",
    Template
);

by_id_options!(
    DeleteTemplateOptions,
    delete,
    "/v1/instances/{instance_id}/templates/{id}",
    NoContent
);

/// Replace a template; unset fields keep their current value
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplaceTemplateOptions {
    #[serde(skip)]
    pub instance_id: String,
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<TemplateConfig>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl ReplaceTemplateOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for ReplaceTemplateOptions {
    type Output = Template;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::put("/v1/instances/{instance_id}/templates/{id}")
            .path_param("instance_id", self.instance_id.as_str())
            .path_param("id", self.id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

impl EventNotifications {
    pub async fn create_template(
        &self,
        options: &CreateTemplateOptions,
    ) -> Result<DetailedResponse<TemplateResponse>> {
        self.execute(options).await
    }

    pub async fn list_templates(
        &self,
        options: &ListTemplatesOptions,
    ) -> Result<DetailedResponse<TemplateList>> {
        self.execute(options).await
    }

    pub async fn get_template(
        &self,
        options: &GetTemplateOptions,
    ) -> Result<DetailedResponse<Template>> {
        self.execute(options).await
    }

    pub async fn replace_template(
        &self,
        options: &ReplaceTemplateOptions,
    ) -> Result<DetailedResponse<Template>> {
        self.execute(options).await
    }

    pub async fn delete_template(
        &self,
        options: &DeleteTemplateOptions,
    ) -> Result<DetailedResponse<NoContent>> {
        self.execute(options).await
    }
}
