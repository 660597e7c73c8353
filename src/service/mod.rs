//! Event Notifications service client
//!
//! [`EventNotifications`] owns a [`Transport`] and exposes one async method per
//! API operation. Each operation takes an `*Options` value that knows how to
//! validate itself and describe its request; see [`Operation`].
//!
//! ```rust,ignore
//! use event_notifications::{EventNotifications, ServiceConfig};
//! use event_notifications::service::{CreateSourcesOptions, ListSourcesOptions};
//!
//! let client = EventNotifications::new(&ServiceConfig::from_env()?)?;
//!
//! let created = client
//!     .create_sources(&CreateSourcesOptions::new(instance_id, "orders", "Order events"))
//!     .await?;
//!
//! let all = client.pager(ListSourcesOptions::new(instance_id))?.get_all().await?;
//! ```

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::http::{ApiRequest, HttpClient, HttpClientConfig, Transport};
use crate::pagination::{ListOperation, Pager};
use crate::types::DetailedResponse;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Options for an operation addressed by instance and resource id
macro_rules! by_id_options {
    ($(#[$meta:meta])* $name:ident, $method:ident, $path:literal, $output:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub instance_id: String,
            pub id: String,
            pub headers: $crate::types::StringMap,
        }

        impl $name {
            pub fn new(instance_id: impl Into<String>, id: impl Into<String>) -> Self {
                Self {
                    instance_id: instance_id.into(),
                    id: id.into(),
                    headers: $crate::types::StringMap::new(),
                }
            }
        }

        impl $crate::service::Operation for $name {
            type Output = $output;

            fn validate(&self) -> $crate::error::Result<()> {
                $crate::validation::RequiredParams::new()
                    .text("instance_id", &self.instance_id)
                    .text("id", &self.id)
                    .check()
            }

            fn to_request(&self) -> $crate::error::Result<$crate::http::ApiRequest> {
                Ok($crate::http::ApiRequest::$method($path)
                    .path_param("instance_id", self.instance_id.as_str())
                    .path_param("id", self.id.as_str())
                    .headers(&self.headers))
            }
        }
    };
}

/// Options for an instance-scoped list operation with `limit`/`offset`/`search`
macro_rules! list_options {
    ($(#[$meta:meta])* $name:ident, $path:literal, $output:ty, $item:ty, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub instance_id: String,
            /// Page size
            pub limit: Option<u64>,
            /// Starting offset; pagers manage this themselves
            pub offset: Option<u64>,
            /// Case-insensitive name filter
            pub search: Option<String>,
            pub headers: $crate::types::StringMap,
        }

        impl $name {
            pub fn new(instance_id: impl Into<String>) -> Self {
                Self {
                    instance_id: instance_id.into(),
                    ..Default::default()
                }
            }
        }

        impl $crate::service::Operation for $name {
            type Output = $output;

            fn validate(&self) -> $crate::error::Result<()> {
                $crate::validation::RequiredParams::new()
                    .text("instance_id", &self.instance_id)
                    .check()
            }

            fn to_request(&self) -> $crate::error::Result<$crate::http::ApiRequest> {
                Ok($crate::http::ApiRequest::get($path)
                    .path_param("instance_id", self.instance_id.as_str())
                    .query_opt("limit", self.limit)
                    .query_opt("offset", self.offset)
                    .query_opt("search", self.search.as_deref())
                    .headers(&self.headers))
            }
        }

        impl $crate::pagination::ListOperation for $name {
            type Item = $item;
            const ITEMS_FIELD: &'static str = $field;
        }
    };
}

mod destinations;
mod integrations;
mod metrics;
mod notifications;
mod smtp;
mod sources;
mod subscriptions;
mod templates;
mod topics;

pub use destinations::{
    Attachment, CreateDestinationOptions, CreateTagsSubscriptionOptions,
    DeleteDestinationOptions, DeleteTagsSubscriptionOptions, GetDestinationOptions,
    GetEnabledCountriesOptions, ListDestinationsOptions, ListTagsSubscriptionOptions,
    TestDestinationOptions, UpdateDestinationOptions, UpdateVerifyDestinationOptions,
};
pub use integrations::{
    CreateIntegrationOptions, GetIntegrationOptions, ListIntegrationsOptions,
    ReplaceIntegrationOptions,
};
pub use metrics::GetMetricsOptions;
pub use notifications::{SendBulkNotificationsOptions, SendNotificationsOptions};
pub use smtp::{
    CreateSmtpConfigurationOptions, CreateSmtpUserOptions, DeleteSmtpConfigurationOptions,
    DeleteSmtpUserOptions, GetSmtpAllowedIpsOptions, GetSmtpConfigurationOptions,
    GetSmtpUserOptions, ListSmtpConfigurationsOptions, ListSmtpUsersOptions,
    UpdateSmtpConfigurationOptions, UpdateSmtpUserOptions, UpdateVerifySmtpOptions,
};
pub use sources::{
    CreateSourcesOptions, DeleteSourceOptions, GetSourceOptions, ListSourcesOptions,
    UpdateSourceOptions,
};
pub use subscriptions::{
    CreateSubscriptionOptions, DeleteSubscriptionOptions, GetSubscriptionOptions,
    ListSubscriptionsOptions, UpdateSubscriptionOptions,
};
pub use templates::{
    CreateTemplateOptions, DeleteTemplateOptions, GetTemplateOptions, ListTemplatesOptions,
    ReplaceTemplateOptions,
};
pub use topics::{
    CreateTopicOptions, DeleteTopicOptions, GetTopicOptions, ListTopicsOptions,
    ReplaceTopicOptions,
};

/// A single API operation
///
/// `validate` runs before any I/O; `to_request` maps the options onto path,
/// query, body and headers.
pub trait Operation: Send + Sync {
    /// Typed response body
    type Output: DeserializeOwned;

    /// Check required parameters
    fn validate(&self) -> Result<()>;

    /// Describe the HTTP request
    fn to_request(&self) -> Result<ApiRequest>;
}

/// Client for the Event Notifications API
#[derive(Clone)]
pub struct EventNotifications {
    transport: Arc<dyn Transport>,
}

impl EventNotifications {
    /// Create a client backed by the reqwest transport
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Self::with_http_config(config.to_http_config())
    }

    /// Create a client from `EVENT_NOTIFICATIONS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(&ServiceConfig::from_env()?)
    }

    /// Create a client from explicit transport settings
    pub fn with_http_config(config: HttpClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpClient::with_config(
            config,
        )?)))
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The transport requests are sent through
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Validate, send and decode one operation
    pub async fn execute<O: Operation>(&self, options: &O) -> Result<DetailedResponse<O::Output>> {
        options.validate()?;
        let request = options.to_request()?;
        debug!(method = %request.method, path = %request.path, "Executing operation");
        let response = self.transport.send(request).await?;
        response.into_detailed()
    }

    /// Start a pager over a list operation
    pub fn pager<O: ListOperation>(&self, options: O) -> Result<Pager<O>> {
        Pager::new(self, options)
    }
}

impl std::fmt::Debug for EventNotifications {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventNotifications").finish_non_exhaustive()
    }
}
