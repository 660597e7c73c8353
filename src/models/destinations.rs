//! Destination and tag subscription shapes

use super::common::PageHref;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery channel kind
///
/// Values the client does not know are kept verbatim in `Other`, so a
/// destination read from the service can be sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DestinationType {
    Webhook,
    PushAndroid,
    PushIos,
    PushChrome,
    PushFirefox,
    PushSafari,
    PushHuawei,
    Slack,
    Msteams,
    Ibmce,
    Ibmcos,
    Pagerduty,
    Servicenow,
    SmtpIbm,
    SmtpCustom,
    SmsIbm,
    SmsCustom,
    EventStreams,
    AppConfiguration,
    Other(String),
}

const KNOWN_TYPES: [DestinationType; 19] = [
    DestinationType::Webhook,
    DestinationType::PushAndroid,
    DestinationType::PushIos,
    DestinationType::PushChrome,
    DestinationType::PushFirefox,
    DestinationType::PushSafari,
    DestinationType::PushHuawei,
    DestinationType::Slack,
    DestinationType::Msteams,
    DestinationType::Ibmce,
    DestinationType::Ibmcos,
    DestinationType::Pagerduty,
    DestinationType::Servicenow,
    DestinationType::SmtpIbm,
    DestinationType::SmtpCustom,
    DestinationType::SmsIbm,
    DestinationType::SmsCustom,
    DestinationType::EventStreams,
    DestinationType::AppConfiguration,
];

impl From<String> for DestinationType {
    fn from(value: String) -> Self {
        KNOWN_TYPES
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .unwrap_or(DestinationType::Other(value))
    }
}

impl From<&str> for DestinationType {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<DestinationType> for String {
    fn from(value: DestinationType) -> Self {
        match value {
            DestinationType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl DestinationType {
    /// Wire name, as sent in form fields and query strings
    pub fn as_str(&self) -> &str {
        match self {
            DestinationType::Webhook => "webhook",
            DestinationType::PushAndroid => "push_android",
            DestinationType::PushIos => "push_ios",
            DestinationType::PushChrome => "push_chrome",
            DestinationType::PushFirefox => "push_firefox",
            DestinationType::PushSafari => "push_safari",
            DestinationType::PushHuawei => "push_huawei",
            DestinationType::Slack => "slack",
            DestinationType::Msteams => "msteams",
            DestinationType::Ibmce => "ibmce",
            DestinationType::Ibmcos => "ibmcos",
            DestinationType::Pagerduty => "pagerduty",
            DestinationType::Servicenow => "servicenow",
            DestinationType::SmtpIbm => "smtp_ibm",
            DestinationType::SmtpCustom => "smtp_custom",
            DestinationType::SmsIbm => "sms_ibm",
            DestinationType::SmsCustom => "sms_custom",
            DestinationType::EventStreams => "event_streams",
            DestinationType::AppConfiguration => "app_configuration",
            DestinationType::Other(name) => name.as_str(),
        }
    }

    /// Whether the channel is a push platform that accepts device tags
    pub fn is_push(&self) -> bool {
        matches!(
            self,
            DestinationType::PushAndroid
                | DestinationType::PushIos
                | DestinationType::PushChrome
                | DestinationType::PushFirefox
                | DestinationType::PushSafari
                | DestinationType::PushHuawei
        )
    }
}

impl std::fmt::Display for DestinationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel-specific settings
///
/// The keys of `params` depend on the destination type (`url` and `verb` for
/// webhooks, `sender_id` for Android push, and so on).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationConfig {
    pub params: JsonObject,
}

impl DestinationConfig {
    pub fn new(params: JsonObject) -> Self {
        Self { params }
    }

    /// Add or replace a parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Result of creating a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub destination_type: DestinationType,
    #[serde(default)]
    pub collect_failed_events: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A destination with its configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub destination_type: DestinationType,
    #[serde(default)]
    pub collect_failed_events: Option<bool>,
    #[serde(default)]
    pub config: Option<DestinationConfig>,
    #[serde(default)]
    pub subscription_count: Option<u64>,
    #[serde(default)]
    pub subscription_names: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub destination_type: DestinationType,
    #[serde(default)]
    pub collect_failed_events: Option<bool>,
    #[serde(default)]
    pub subscription_count: Option<u64>,
    #[serde(default)]
    pub subscription_names: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of destinations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationList {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    pub destinations: Vec<DestinationListItem>,
    #[serde(default)]
    pub first: Option<PageHref>,
    #[serde(default)]
    pub previous: Option<PageHref>,
    #[serde(default)]
    pub next: Option<PageHref>,
}

/// Countries an SMS destination may deliver to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnabledCountries {
    #[serde(rename = "type", default)]
    pub destination_type: Option<DestinationType>,
    #[serde(default)]
    pub enabled_countries: Vec<EnabledCountryGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnabledCountryGroup {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub country: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestDestinationResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notification_id: Option<String>,
}

/// Outcome of a domain verification request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResponse {
    #[serde(default)]
    pub status: Vec<VerificationStatus>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationStatus {
    #[serde(rename = "type")]
    pub verification_type: String,
    pub verification: String,
}

// ============================================================================
// Tag Subscriptions
// ============================================================================

/// Result of subscribing a device to a tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagsSubscriptionResponse {
    pub id: String,
    pub device_id: String,
    pub tag_name: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagsSubscriptionListItem {
    pub id: String,
    pub device_id: String,
    pub tag_name: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of tag subscriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagsSubscriptionList {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    pub tag_subscriptions: Vec<TagsSubscriptionListItem>,
    #[serde(default)]
    pub first: Option<PageHref>,
    #[serde(default)]
    pub previous: Option<PageHref>,
    #[serde(default)]
    pub next: Option<PageHref>,
}
