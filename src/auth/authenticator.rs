//! Authenticator implementation
//!
//! Applies configured credentials to outgoing requests.

use super::types::AuthConfig;
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The underlying configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,

            AuthConfig::Bearer { token } => req.bearer_auth(token),

            AuthConfig::Basic { username, password } => req.basic_auth(username, Some(password)),

            AuthConfig::ApiKey {
                header_name,
                prefix,
                value,
            } => {
                let header = header_name.as_deref().unwrap_or("Authorization");
                let val = format!("{}{}", prefix.as_deref().unwrap_or(""), value);
                req.header(header, val)
            }

            AuthConfig::Headers { headers } => {
                let mut req = req;
                for (key, value) in headers {
                    req = req.header(key.as_str(), value.as_str());
                }
                req
            }
        }
    }
}
