//! Source shapes

use super::common::PageHref;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of creating a source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A source with its topic usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub frozen: Option<bool>,
    #[serde(default)]
    pub topic_count: Option<u64>,
    #[serde(default)]
    pub topic_names: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub topic_count: Option<u64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceList {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    pub sources: Vec<SourceListItem>,
    #[serde(default)]
    pub first: Option<PageHref>,
    #[serde(default)]
    pub previous: Option<PageHref>,
    #[serde(default)]
    pub next: Option<PageHref>,
}
