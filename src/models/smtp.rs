//! SMTP configuration and user shapes

use super::common::PageHref;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// DNS record the domain owner must publish, and whether it checked out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmtpVerificationAttributes {
    #[serde(default)]
    pub txt_name: Option<String>,
    #[serde(default)]
    pub txt_value: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub verification: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmtpDomainConfig {
    #[serde(default)]
    pub dkim: Option<SmtpVerificationAttributes>,
    #[serde(default)]
    pub en_authorization: Option<SmtpVerificationAttributes>,
    #[serde(default)]
    pub spf: Option<SmtpVerificationAttributes>,
}

/// An SMTP configuration (sender domain)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtpConfiguration {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub domain: String,
    #[serde(default)]
    pub config: Option<SmtpDomainConfig>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of SMTP configurations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtpConfigurationList {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    pub smtp_configurations: Vec<SmtpConfiguration>,
    #[serde(default)]
    pub first: Option<PageHref>,
    #[serde(default)]
    pub previous: Option<PageHref>,
    #[serde(default)]
    pub next: Option<PageHref>,
}

/// SMTP credentials; `password` is only returned on creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtpUser {
    pub id: String,
    pub smtp_config_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of SMTP users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtpUserList {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    pub users: Vec<SmtpUser>,
    #[serde(default)]
    pub first: Option<PageHref>,
    #[serde(default)]
    pub previous: Option<PageHref>,
    #[serde(default)]
    pub next: Option<PageHref>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtpAllowedIps {
    pub subnets: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
