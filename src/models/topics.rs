//! Topic shapes

use super::common::PageHref;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter attached to a source within a topic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_filter: Option<String>,
}

/// Source binding sent when creating or replacing a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesItems {
    pub id: String,
    pub rules: Vec<Rule>,
}

impl SourcesItems {
    pub fn new(id: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            id: id.into(),
            rules,
        }
    }
}

/// Source binding as returned inside a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSource {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Result of creating a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_count: Option<u64>,
    #[serde(default)]
    pub sources: Vec<TopicSource>,
    #[serde(default)]
    pub subscription_count: Option<u64>,
    /// Subscription summaries; only present when requested with `include`
    #[serde(default)]
    pub subscriptions: Vec<JsonObject>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicsListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_count: Option<u64>,
    #[serde(default)]
    pub subscription_count: Option<u64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicList {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    pub topics: Vec<TopicsListItem>,
    #[serde(default)]
    pub first: Option<PageHref>,
    #[serde(default)]
    pub previous: Option<PageHref>,
    #[serde(default)]
    pub next: Option<PageHref>,
}
