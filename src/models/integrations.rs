//! Integration shapes (key management and storage bindings)

use super::common::PageHref;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationMetadata {
    pub endpoint: String,
    pub crn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    pub id: String,
    #[serde(rename = "type")]
    pub integration_type: String,
    pub metadata: IntegrationMetadata,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of integrations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationList {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    pub integrations: Vec<Integration>,
    #[serde(default)]
    pub first: Option<PageHref>,
    #[serde(default)]
    pub previous: Option<PageHref>,
    #[serde(default)]
    pub next: Option<PageHref>,
}
