//! HTTP client with optional retries
//!
//! The reqwest-backed [`Transport`]. It handles:
//! - Rendering templated paths against the service URL
//! - Header precedence (computed < client defaults < caller overrides)
//! - JSON and multipart bodies
//! - Optional retries with configurable backoff (off unless `max_retries > 0`)
//! - Mapping non-2xx responses to `Error::HttpStatus`

use super::request::{ApiRequest, ApiResponse, RequestBody};
use super::transport::Transport;
use crate::auth::{AuthConfig, Authenticator};
use crate::config::DEFAULT_SERVICE_URL;
use crate::error::{is_retryable_status, Error, Result};
use crate::types::{BackoffType, JsonValue, StringMap};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Service URL all request paths are relative to
    pub service_url: String,
    /// Credentials applied to every request
    pub auth: AuthConfig,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries (0 disables retrying)
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            auth: AuthConfig::None,
            timeout: Duration::from_secs(30),
            max_retries: 0,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(30),
            backoff_type: BackoffType::Exponential,
            default_headers: StringMap::new(),
            user_agent: format!("event-notifications-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the service URL
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.config.service_url = url.into();
        self
    }

    /// Set credentials
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// reqwest-backed transport
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        // Fail on a bad service URL here rather than on the first request.
        Url::parse(&config.service_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let authenticator = Authenticator::new(config.auth.clone());

        Ok(Self {
            client,
            config,
            authenticator,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// The active configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Send a request, retrying retryable failures when enabled
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = request.render_url(&self.config.service_url)?;
        let max_retries = self.config.max_retries;
        let mut attempt = 0;

        loop {
            let req = self.build_request(&request, url.clone())?;
            debug!(method = %request.method, url = %url, attempt, "Sending request");

            match req.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();

                    if is_retryable_status(status) && attempt < max_retries {
                        let delay = extract_retry_after(&response)
                            .map_or_else(|| self.calculate_backoff(attempt), |d| {
                                std::cmp::min(d, self.config.max_backoff)
                            });
                        warn!(
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status,
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return read_response(response).await;
                }
                Err(e) if e.is_timeout() => {
                    if attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Request timeout, attempt {}/{}, retrying in {:?}",
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(Error::Timeout {
                        timeout_ms: self.config.timeout.as_millis() as u64,
                    });
                }
                Err(e) if e.is_connect() && attempt < max_retries => {
                    let delay = self.calculate_backoff(attempt);
                    warn!(
                        "Connection error, attempt {}/{}, retrying in {:?}",
                        attempt + 1,
                        max_retries + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(Error::Http(e)),
            }
        }
    }

    /// Build a reqwest request from the declarative description
    fn build_request(&self, request: &ApiRequest, url: Url) -> Result<reqwest::RequestBuilder> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if matches!(request.body, RequestBody::Json(_)) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        insert_headers(&mut headers, &self.config.default_headers)?;
        insert_headers(&mut headers, &request.headers)?;

        let mut req = self.client.request(request.method.into(), url);
        req = self.authenticator.apply(req);
        // `headers` replaces same-named values, so overrides also beat auth.
        req = req.headers(headers);

        let req = match &request.body {
            RequestBody::Empty => req,
            RequestBody::Json(body) => req.body(serde_json::to_vec(body)?),
            RequestBody::Multipart(parts) => {
                let mut form = reqwest::multipart::Form::new();
                for part in parts {
                    form = form.part(part.name.clone(), part.to_part()?);
                }
                req.multipart(form)
            }
        };

        Ok(req)
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff.saturating_mul(factor)
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.execute(request).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn insert_headers(target: &mut HeaderMap, source: &StringMap) -> Result<()> {
    for (key, value) in source {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| Error::invalid_parameter("headers", format!("{key}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::invalid_parameter("headers", format!("{key}: {e}")))?;
        target.insert(name, value);
    }
    Ok(())
}

/// Turn a raw response into an `ApiResponse` or an `HttpStatus` error
async fn read_response(response: Response) -> Result<ApiResponse> {
    let status = response.status();
    let headers = response.headers().clone();
    let text = response.text().await?;

    if !status.is_success() {
        let message = extract_error_message(&text).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });
        debug!(status = status.as_u16(), %message, "Request failed");
        return Err(Error::http_status(status.as_u16(), message));
    }

    debug!(status = status.as_u16(), "Request succeeded");
    Ok(ApiResponse {
        status: status.as_u16(),
        headers,
        result: parse_body(&text),
    })
}

/// Parse a response body; empty bodies become `null`, non-JSON text a string
pub(crate) fn parse_body(text: &str) -> JsonValue {
    if text.trim().is_empty() {
        return JsonValue::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| JsonValue::String(text.to_string()))
}

/// Pull a human-readable message out of an error body
pub(crate) fn extract_error_message(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let Ok(body) = serde_json::from_str::<JsonValue>(text) else {
        return Some(text.trim().to_string());
    };

    let candidates = [
        body.pointer("/errors/0/message"),
        body.get("error"),
        body.get("message"),
        body.get("errorMessage"),
    ];
    let message = candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str().map(ToString::to_string));
    message.or_else(|| Some(text.trim().to_string()))
}

/// Extract retry-after header value
fn extract_retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
}
