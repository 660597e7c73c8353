//! SMTP configuration and user operations

use super::{EventNotifications, Operation};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::models::{
    SmtpAllowedIps, SmtpConfiguration, SmtpConfigurationList, SmtpUser, SmtpUserList,
    VerificationResponse,
};
use crate::pagination::ListOperation;
use crate::types::{DetailedResponse, NoContent, StringMap};
use crate::validation::RequiredParams;
use serde::Serialize;

/// Options addressing one user of an SMTP configuration
macro_rules! smtp_user_options {
    ($(#[$meta:meta])* $name:ident, $method:ident, $output:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub instance_id: String,
            /// SMTP configuration id
            pub id: String,
            pub user_id: String,
            pub headers: StringMap,
        }

        impl $name {
            pub fn new(
                instance_id: impl Into<String>,
                id: impl Into<String>,
                user_id: impl Into<String>,
            ) -> Self {
                Self {
                    instance_id: instance_id.into(),
                    id: id.into(),
                    user_id: user_id.into(),
                    headers: StringMap::new(),
                }
            }
        }

        impl Operation for $name {
            type Output = $output;

            fn validate(&self) -> Result<()> {
                RequiredParams::new()
                    .text("instance_id", &self.instance_id)
                    .text("id", &self.id)
                    .text("user_id", &self.user_id)
                    .check()
            }

            fn to_request(&self) -> Result<ApiRequest> {
                Ok(ApiRequest::$method(
                    "/v1/instances/{instance_id}/smtp/config/{id}/users/{user_id}",
                )
                .path_param("instance_id", self.instance_id.as_str())
                .path_param("id", self.id.as_str())
                .path_param("user_id", self.user_id.as_str())
                .headers(&self.headers))
            }
        }
    };
}

// ============================================================================
// Configurations
// ============================================================================

/// Register a sender domain
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSmtpConfigurationOptions {
    #[serde(skip)]
    pub instance_id: String,
    pub name: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl CreateSmtpConfigurationOptions {
    pub fn new(
        instance_id: impl Into<String>,
        name: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            name: name.into(),
            domain: domain.into(),
            ..Default::default()
        }
    }
}

impl Operation for CreateSmtpConfigurationOptions {
    type Output = SmtpConfiguration;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("name", &self.name)
            .text("domain", &self.domain)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::post("/v1/instances/{instance_id}/smtp/config")
            .path_param("instance_id", self.instance_id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

list_options!(
    /// List SMTP configurations
    ListSmtpConfigurationsOptions,
    "/v1/instances/{instance_id}/smtp/config",
    SmtpConfigurationList,
    SmtpConfiguration,
    "smtp_configurations"
);

by_id_options!(
    GetSmtpConfigurationOptions,
    get,
    "/v1/instances/{instance_id}/smtp/config/{id}",
    SmtpConfiguration
);

by_id_options!(
    DeleteSmtpConfigurationOptions,
    delete,
    "/v1/instances/{instance_id}/smtp/config/{id}",
    NoContent
);

by_id_options!(
    /// Subnets the SMTP relay accepts connections from
    GetSmtpAllowedIpsOptions,
    get,
    "/v1/instances/{instance_id}/smtp/config/{id}/allowed_ips",
    SmtpAllowedIps
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSmtpConfigurationOptions {
    #[serde(skip)]
    pub instance_id: String,
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl UpdateSmtpConfigurationOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for UpdateSmtpConfigurationOptions {
    type Output = SmtpConfiguration;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::patch("/v1/instances/{instance_id}/smtp/config/{id}")
            .path_param("instance_id", self.instance_id.as_str())
            .path_param("id", self.id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

/// Re-check the DNS records of a sender domain
#[derive(Debug, Clone, Default)]
pub struct UpdateVerifySmtpOptions {
    pub instance_id: String,
    pub id: String,
    /// Record kind to verify (`dkim`, `spf`, `en_authorization`)
    pub verification_type: String,
    pub headers: StringMap,
}

impl UpdateVerifySmtpOptions {
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

impl Operation for UpdateVerifySmtpOptions {
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
            ApiRequest::patch("/v1/instances/{instance_id}/smtp/config/{id}/verify")
                .path_param("instance_id", self.instance_id.as_str())
                .path_param("id", self.id.as_str())
                .query("type", &self.verification_type)
                .headers(&self.headers),
        )
    }
}

// ============================================================================
// Users
// ============================================================================

/// Issue SMTP credentials for a configuration
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSmtpUserOptions {
    #[serde(skip)]
    pub instance_id: String,
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl CreateSmtpUserOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for CreateSmtpUserOptions {
    type Output = SmtpUser;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::post("/v1/instances/{instance_id}/smtp/config/{id}/users")
            .path_param("instance_id", self.instance_id.as_str())
            .path_param("id", self.id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

/// List users of an SMTP configuration
#[derive(Debug, Clone, Default)]
pub struct ListSmtpUsersOptions {
    pub instance_id: String,
    /// SMTP configuration id
    pub id: String,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub search: Option<String>,
    pub headers: StringMap,
}

impl ListSmtpUsersOptions {
    pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Operation for ListSmtpUsersOptions {
    type Output = SmtpUserList;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        Ok(
            ApiRequest::get("/v1/instances/{instance_id}/smtp/config/{id}/users")
                .path_param("instance_id", self.instance_id.as_str())
                .path_param("id", self.id.as_str())
                .query_opt("limit", self.limit)
                .query_opt("offset", self.offset)
                .query_opt("search", self.search.as_deref())
                .headers(&self.headers),
        )
    }
}

impl ListOperation for ListSmtpUsersOptions {
    type Item = SmtpUser;
    const ITEMS_FIELD: &'static str = "users";
}

smtp_user_options!(GetSmtpUserOptions, get, SmtpUser);

smtp_user_options!(
    /// Revoke SMTP credentials
    DeleteSmtpUserOptions,
    delete,
    NoContent
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSmtpUserOptions {
    #[serde(skip)]
    pub instance_id: String,
    #[serde(skip)]
    pub id: String,
    #[serde(skip)]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub headers: StringMap,
}

impl UpdateSmtpUserOptions {
    pub fn new(
        instance_id: impl Into<String>,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            id: id.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}

impl Operation for UpdateSmtpUserOptions {
    type Output = SmtpUser;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("id", &self.id)
            .text("user_id", &self.user_id)
            .check()
    }

    fn to_request(&self) -> Result<ApiRequest> {
        ApiRequest::patch("/v1/instances/{instance_id}/smtp/config/{id}/users/{user_id}")
            .path_param("instance_id", self.instance_id.as_str())
            .path_param("id", self.id.as_str())
            .path_param("user_id", self.user_id.as_str())
            .headers(&self.headers)
            .json_body(self)
    }
}

impl EventNotifications {
    pub async fn create_smtp_configuration(
        &self,
        options: &CreateSmtpConfigurationOptions,
    ) -> Result<DetailedResponse<SmtpConfiguration>> {
        self.execute(options).await
    }

    pub async fn list_smtp_configurations(
        &self,
        options: &ListSmtpConfigurationsOptions,
    ) -> Result<DetailedResponse<SmtpConfigurationList>> {
        self.execute(options).await
    }

    pub async fn get_smtp_configuration(
        &self,
        options: &GetSmtpConfigurationOptions,
    ) -> Result<DetailedResponse<SmtpConfiguration>> {
        self.execute(options).await
    }

    pub async fn get_smtp_allowed_ips(
        &self,
        options: &GetSmtpAllowedIpsOptions,
    ) -> Result<DetailedResponse<SmtpAllowedIps>> {
        self.execute(options).await
    }

    pub async fn update_smtp_configuration(
        &self,
        options: &UpdateSmtpConfigurationOptions,
    ) -> Result<DetailedResponse<SmtpConfiguration>> {
        self.execute(options).await
    }

    pub async fn delete_smtp_configuration(
        &self,
        options: &DeleteSmtpConfigurationOptions,
    ) -> Result<DetailedResponse<NoContent>> {
        self.execute(options).await
    }

    pub async fn update_verify_smtp(
        &self,
        options: &UpdateVerifySmtpOptions,
    ) -> Result<DetailedResponse<VerificationResponse>> {
        self.execute(options).await
    }

    pub async fn create_smtp_user(
        &self,
        options: &CreateSmtpUserOptions,
    ) -> Result<DetailedResponse<SmtpUser>> {
        self.execute(options).await
    }

    pub async fn list_smtp_users(
        &self,
        options: &ListSmtpUsersOptions,
    ) -> Result<DetailedResponse<SmtpUserList>> {
        self.execute(options).await
    }

    pub async fn get_smtp_user(
        &self,
        options: &GetSmtpUserOptions,
    ) -> Result<DetailedResponse<SmtpUser>> {
        self.execute(options).await
    }

    pub async fn update_smtp_user(
        &self,
        options: &UpdateSmtpUserOptions,
    ) -> Result<DetailedResponse<SmtpUser>> {
        self.execute(options).await
    }

    pub async fn delete_smtp_user(
        &self,
        options: &DeleteSmtpUserOptions,
    ) -> Result<DetailedResponse<NoContent>> {
        self.execute(options).await
    }
}
