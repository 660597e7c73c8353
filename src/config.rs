//! Service configuration
//!
//! A [`ServiceConfig`] can be written in YAML, read from the environment, or
//! built in code. It resolves into an [`HttpClientConfig`] for the transport.
//!
//! ```yaml
//! region: eu-de
//! auth:
//!   type: bearer
//!   token: eyJhbGciOi...
//! http:
//!   timeout_secs: 10
//!   max_retries: 2
//!   backoff: exponential
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::types::{BackoffType, OptionStringExt, StringMap};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Region used when neither a URL nor a region is configured
pub const DEFAULT_REGION: &str = "us-south";

/// Service URL for [`DEFAULT_REGION`]
pub const DEFAULT_SERVICE_URL: &str =
    "https://us-south.event-notifications.cloud.ibm.com/event-notifications";

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "EVENT_NOTIFICATIONS";

/// Public endpoint for a region
pub fn service_url_for_region(region: &str) -> String {
    format!("https://{region}.event-notifications.cloud.ibm.com/event-notifications")
}

// ============================================================================
// Top-Level Service Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Explicit service URL; wins over `region`
    #[serde(default)]
    pub service_url: Option<String>,

    /// Region used to derive the service URL
    #[serde(default)]
    pub region: Option<String>,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
}

/// HTTP tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries for 429/5xx/timeouts; 0 disables retrying
    #[serde(default)]
    pub max_retries: u32,

    /// First backoff delay in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Backoff ceiling in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Backoff strategy
    #[serde(default)]
    pub backoff: BackoffType,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: StringMap,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_initial_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_ms() -> u64 {
    30_000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            backoff: BackoffType::default(),
            user_agent: None,
            headers: StringMap::new(),
        }
    }
}

impl ServiceConfig {
    /// Parse from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Read `EVENT_NOTIFICATIONS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(DEFAULT_ENV_PREFIX, |key| std::env::var(key).ok())
    }

    /// Build from `<PREFIX>_*` variables supplied by `lookup`
    ///
    /// Recognised suffixes: `URL`, `REGION`, `AUTH_TYPE` (`bearer`, `basic`,
    /// `api_key`, `none`), `BEARER_TOKEN`, `APIKEY`, `USERNAME`, `PASSWORD`,
    /// `TIMEOUT` (seconds) and `MAX_RETRIES`.
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{prefix}_{suffix}")).none_if_empty();
        let require = |suffix: &str| {
            var(suffix).ok_or_else(|| Error::missing_field(format!("{prefix}_{suffix}")))
        };

        let auth_type = var("AUTH_TYPE").map(|s| s.to_ascii_lowercase());
        let auth = match auth_type.as_deref() {
            None | Some("none" | "noauth") => {
                // A bare token is enough to imply bearer auth.
                match var("BEARER_TOKEN") {
                    Some(token) if auth_type.is_none() => AuthConfig::Bearer { token },
                    _ => AuthConfig::None,
                }
            }
            Some("bearer" | "bearertoken") => AuthConfig::Bearer {
                token: require("BEARER_TOKEN")?,
            },
            Some("basic") => AuthConfig::Basic {
                username: require("USERNAME")?,
                password: require("PASSWORD")?,
            },
            Some("api_key" | "apikey") => AuthConfig::ApiKey {
                header_name: None,
                prefix: None,
                value: require("APIKEY")?,
            },
            Some(other) => {
                return Err(Error::config(format!(
                    "Unsupported auth type '{other}' in {prefix}_AUTH_TYPE"
                )))
            }
        };

        let mut http = HttpConfig::default();
        if let Some(timeout) = var("TIMEOUT") {
            http.timeout_secs = timeout.parse().map_err(|_| {
                Error::config(format!("{prefix}_TIMEOUT must be a number of seconds"))
            })?;
        }
        if let Some(retries) = var("MAX_RETRIES") {
            http.max_retries = retries
                .parse()
                .map_err(|_| Error::config(format!("{prefix}_MAX_RETRIES must be an integer")))?;
        }

        Ok(Self {
            service_url: var("URL"),
            region: var("REGION"),
            auth,
            http,
        })
    }

    /// Resolved service URL
    pub fn resolved_service_url(&self) -> String {
        match (&self.service_url, &self.region) {
            (Some(url), _) => url.clone(),
            (None, Some(region)) => service_url_for_region(region),
            (None, None) => DEFAULT_SERVICE_URL.to_string(),
        }
    }

    /// Convert into transport configuration
    pub fn to_http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .service_url(self.resolved_service_url())
            .auth(self.auth.clone())
            .timeout(Duration::from_secs(self.http.timeout_secs))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff,
                Duration::from_millis(self.http.initial_backoff_ms),
                Duration::from_millis(self.http.max_backoff_ms),
            );

        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        for (key, value) in &self.http.headers {
            builder = builder.header(key.clone(), value.clone());
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.resolved_service_url(), DEFAULT_SERVICE_URL);
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.http.max_retries, 0);
    }

    #[test]
    fn test_region_and_url_precedence() {
        let mut config = ServiceConfig {
            region: Some("eu-de".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_service_url(),
            "https://eu-de.event-notifications.cloud.ibm.com/event-notifications"
        );

        config.service_url = Some("http://localhost:8080".to_string());
        assert_eq!(config.resolved_service_url(), "http://localhost:8080");
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r"
region: au-syd
auth:
  type: bearer
  token: tok
http:
  timeout_secs: 5
  max_retries: 2
  backoff: linear
  headers:
    X-Team: alerts
";
        let config = ServiceConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.region.as_deref(), Some("au-syd"));
        assert_eq!(config.auth, AuthConfig::bearer("tok"));
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.initial_backoff_ms, 100);

        let http = config.to_http_config();
        assert_eq!(http.timeout, Duration::from_secs(5));
        assert_eq!(http.max_retries, 2);
        assert_eq!(http.backoff_type, BackoffType::Linear);
        assert_eq!(http.default_headers.get("X-Team"), Some(&"alerts".to_string()));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "service_url: http://127.0.0.1:9000").unwrap();

        let config = ServiceConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.resolved_service_url(), "http://127.0.0.1:9000");
        assert_eq!(config.auth, AuthConfig::None);
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let err = ServiceConfig::from_yaml_file("/nonexistent/en.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_yaml_file_invalid_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "http: [not, a, map]").unwrap();

        let err = ServiceConfig::from_yaml_file(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid config file"));
        assert!(message.contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_from_lookup_bearer() {
        let config = ServiceConfig::from_lookup(
            "EN",
            lookup_from(&[
                ("EN_URL", "http://localhost:1"),
                ("EN_AUTH_TYPE", "bearer"),
                ("EN_BEARER_TOKEN", "abc"),
                ("EN_MAX_RETRIES", "4"),
            ]),
        )
        .unwrap();

        assert_eq!(config.service_url.as_deref(), Some("http://localhost:1"));
        assert_eq!(config.auth, AuthConfig::bearer("abc"));
        assert_eq!(config.http.max_retries, 4);
    }

    #[test]
    fn test_from_lookup_implied_bearer() {
        let config =
            ServiceConfig::from_lookup("EN", lookup_from(&[("EN_BEARER_TOKEN", "xyz")])).unwrap();
        assert_eq!(config.auth, AuthConfig::bearer("xyz"));
    }

    #[test]
    fn test_from_lookup_basic_requires_password() {
        let err = ServiceConfig::from_lookup(
            "EN",
            lookup_from(&[("EN_AUTH_TYPE", "basic"), ("EN_USERNAME", "u")]),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Missing required config field: EN_PASSWORD");
    }

    #[test]
    fn test_from_lookup_rejects_unknown_auth() {
        let err =
            ServiceConfig::from_lookup("EN", lookup_from(&[("EN_AUTH_TYPE", "iam")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err =
            ServiceConfig::from_lookup("EN", lookup_from(&[("EN_TIMEOUT", "soon")])).unwrap_err();
        assert!(err.to_string().contains("EN_TIMEOUT"));
    }
}
