//! Subscription shapes

use super::common::PageHref;
use super::destinations::DestinationType;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subscription binding a topic to a destination
///
/// `attributes` is destination specific: recipients and templates for email,
/// `signing_enabled` for webhooks, and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub destination_id: String,
    #[serde(default)]
    pub destination_name: Option<String>,
    #[serde(default)]
    pub destination_type: Option<DestinationType>,
    pub topic_id: String,
    #[serde(default)]
    pub topic_name: Option<String>,
    #[serde(default)]
    pub attributes: Option<JsonObject>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub destination_id: String,
    #[serde(default)]
    pub destination_name: Option<String>,
    #[serde(default)]
    pub destination_type: Option<DestinationType>,
    pub topic_id: String,
    #[serde(default)]
    pub topic_name: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of subscriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionList {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    pub subscriptions: Vec<SubscriptionListItem>,
    #[serde(default)]
    pub first: Option<PageHref>,
    #[serde(default)]
    pub previous: Option<PageHref>,
    #[serde(default)]
    pub next: Option<PageHref>,
}
