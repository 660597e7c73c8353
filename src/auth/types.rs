//! Auth configuration types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Authentication configuration
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// API key sent in a header
    ApiKey {
        /// Header name (defaults to `Authorization`)
        #[serde(default)]
        header_name: Option<String>,
        /// Prefix to add before the value (e.g., "Bearer ")
        #[serde(default)]
        prefix: Option<String>,
        /// The API key value
        value: String,
    },

    /// Custom headers
    Headers {
        /// Headers to add to each request
        headers: HashMap<String, String>,
    },
}

impl AuthConfig {
    /// Bearer token shorthand
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Basic auth shorthand
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Name of the auth scheme, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AuthConfig::None => "none",
            AuthConfig::Bearer { .. } => "bearer",
            AuthConfig::Basic { .. } => "basic",
            AuthConfig::ApiKey { .. } => "api_key",
            AuthConfig::Headers { .. } => "headers",
        }
    }
}

// Secrets never reach log output.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            AuthConfig::ApiKey {
                header_name,
                prefix,
                ..
            } => f
                .debug_struct("ApiKey")
                .field("header_name", header_name)
                .field("prefix", prefix)
                .field("value", &"***")
                .finish(),
            AuthConfig::Headers { headers } => f
                .debug_struct("Headers")
                .field("names", &headers.keys().collect::<Vec<_>>())
                .finish(),
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        assert_eq!(AuthConfig::default(), AuthConfig::None);
    }

    #[test]
    fn test_auth_config_from_yaml() {
        let config: AuthConfig =
            serde_yaml::from_str("type: api_key\nheader_name: X-Api-Key\nvalue: k-1\n").unwrap();
        assert_eq!(
            config,
            AuthConfig::ApiKey {
                header_name: Some("X-Api-Key".to_string()),
                prefix: None,
                value: "k-1".to_string(),
            }
        );
        assert_eq!(config.kind(), "api_key");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", AuthConfig::basic("alice", "hunter2"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));

        let rendered = format!("{:?}", AuthConfig::bearer("tok-secret"));
        assert!(!rendered.contains("tok-secret"));
    }
}
