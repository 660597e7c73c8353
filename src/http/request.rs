//! Request and response envelopes
//!
//! An [`ApiRequest`] is a declarative description of one call: the path keeps
//! its `{placeholders}` until a transport renders it against the service URL.

use crate::error::{Error, Result};
use crate::types::{DetailedResponse, JsonValue, Method, StringMap};
use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

// ============================================================================
// Request Body
// ============================================================================

/// Body of an outgoing request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON document
    Json(JsonValue),
    /// multipart/form-data parts
    Multipart(Vec<FormPart>),
}

/// Content of a single multipart field
#[derive(Debug, Clone, PartialEq)]
pub enum FormContent {
    /// Text value, optionally typed (JSON parts are sent as `application/json`)
    Text {
        value: String,
        content_type: Option<String>,
    },
    /// Binary attachment
    File {
        data: Bytes,
        filename: Option<String>,
        content_type: Option<String>,
    },
}

/// A named multipart field
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    /// Field name
    pub name: String,
    /// Field content
    pub content: FormContent,
}

impl FormPart {
    /// Plain text field
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: FormContent::Text {
                value: value.into(),
                content_type: None,
            },
        }
    }

    /// JSON-encoded field
    pub fn json<T: Serialize + ?Sized>(name: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            content: FormContent::Text {
                value: serde_json::to_string(value)?,
                content_type: Some("application/json".to_string()),
            },
        })
    }

    /// Binary file field
    pub fn file(
        name: impl Into<String>,
        data: impl Into<Bytes>,
        filename: Option<String>,
        content_type: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: FormContent::File {
                data: data.into(),
                filename,
                content_type,
            },
        }
    }

    /// Text value of the field, if it is not a file
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            FormContent::Text { value, .. } => Some(value),
            FormContent::File { .. } => None,
        }
    }

    /// Convert to a reqwest multipart part
    pub(crate) fn to_part(&self) -> Result<reqwest::multipart::Part> {
        let part = match &self.content {
            FormContent::Text {
                value,
                content_type,
            } => {
                let part = reqwest::multipart::Part::text(value.clone());
                match content_type {
                    Some(mime) => part.mime_str(mime)?,
                    None => part,
                }
            }
            FormContent::File {
                data,
                filename,
                content_type,
            } => {
                let mut part = reqwest::multipart::Part::bytes(data.to_vec());
                if let Some(filename) = filename {
                    part = part.file_name(filename.clone());
                }
                part.mime_str(content_type.as_deref().unwrap_or("application/octet-stream"))?
            }
        };
        Ok(part)
    }
}

// ============================================================================
// Request
// ============================================================================

/// A single API call, before URL rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path template relative to the service URL, e.g. `/v1/instances/{instance_id}/sources`
    pub path: String,
    /// Values substituted for `{placeholders}` in the path
    pub path_params: BTreeMap<String, String>,
    /// Query parameters (later inserts replace earlier ones)
    pub query: BTreeMap<String, String>,
    /// Request body
    pub body: RequestBody,
    /// Caller-supplied headers; these win over computed ones
    pub headers: StringMap,
}

impl ApiRequest {
    /// Create a request for the given method and path template
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Bind a path placeholder
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name.into(), value.into());
        self
    }

    /// Set a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key.into(), value.to_string());
        self
    }

    /// Set a query parameter only when a value is present
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Set a JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Serialize a value as the JSON body
    pub fn json_body<T: Serialize + ?Sized>(self, body: &T) -> Result<Self> {
        Ok(self.json(serde_json::to_value(body)?))
    }

    /// Set a multipart body
    #[must_use]
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Merge caller header overrides
    #[must_use]
    pub fn headers(mut self, overrides: &StringMap) -> Self {
        for (key, value) in overrides {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Value bound to a path placeholder
    pub fn path_param_value(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    /// Value of a query parameter
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Render the full URL against a service URL
    ///
    /// Placeholder values are pushed as single, percent-encoded path segments,
    /// so an id containing `/` cannot escape its segment.
    pub fn render_url(&self, service_url: &str) -> Result<Url> {
        let mut url = Url::parse(service_url)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::config(format!("Service URL cannot be a base: {service_url}")))?;
            segments.pop_if_empty();

            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => {
                        let value = self
                            .path_param_value(name)
                            .filter(|v| !v.is_empty())
                            .ok_or_else(|| Error::missing_parameters([name]))?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        Ok(url)
    }
}

// ============================================================================
// Response
// ============================================================================

/// Successful response with a parsed JSON body (`null` when empty)
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed body
    pub result: JsonValue,
}

impl ApiResponse {
    /// Response with a JSON body and no headers
    pub fn new(status: u16, result: JsonValue) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            result,
        }
    }

    /// Deserialize the body into a typed response
    pub fn into_detailed<T: DeserializeOwned>(self) -> Result<DetailedResponse<T>> {
        let result = serde_json::from_value(self.result)?;
        Ok(DetailedResponse {
            status: self.status,
            headers: self.headers,
            result,
        })
    }
}

#[cfg(test)]
mod request_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_url_with_params_and_query() {
        let request = ApiRequest::get("/v1/instances/{instance_id}/sources")
            .path_param("instance_id", "abc")
            .query("limit", 10)
            .query("search", "a b");

        let url = request
            .render_url("https://us-south.example.com/event-notifications")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://us-south.example.com/event-notifications/v1/instances/abc/sources?limit=10&search=a+b"
        );
    }

    #[test]
    fn test_render_url_encodes_segments() {
        let request = ApiRequest::get("/v1/instances/{instance_id}/topics/{id}")
            .path_param("instance_id", "i 1")
            .path_param("id", "a/b");

        let url = request.render_url("https://host/").unwrap();
        assert_eq!(url.path(), "/v1/instances/i%201/topics/a%2Fb");
    }

    #[test]
    fn test_render_url_missing_param() {
        let request = ApiRequest::get("/v1/instances/{instance_id}").path_param("instance_id", "");
        let err = request.render_url("https://host").unwrap_err();
        assert!(matches!(err, Error::MissingParameters { ref names } if names == &["instance_id"]));
    }

    #[test]
    fn test_query_opt_skips_none() {
        let request = ApiRequest::get("/x")
            .query_opt("limit", Some(5))
            .query_opt::<u64>("offset", None);
        assert_eq!(request.query_value("limit"), Some("5"));
        assert_eq!(request.query_value("offset"), None);
    }

    #[test]
    fn test_header_overrides_replace() {
        let mut overrides = StringMap::new();
        overrides.insert("Accept".to_string(), "text/plain".to_string());

        let request = ApiRequest::get("/x")
            .header("Accept", "application/json")
            .headers(&overrides);
        assert_eq!(request.headers.get("Accept"), Some(&"text/plain".to_string()));
    }

    #[test]
    fn test_form_part_json() {
        let part = FormPart::json("config", &json!({"params": {"url": "https://x"}})).unwrap();
        assert_eq!(part.as_text(), Some(r#"{"params":{"url":"https://x"}}"#));

        let file = FormPart::file("certificate", vec![1u8, 2, 3], None, None);
        assert_eq!(file.as_text(), None);
    }

    #[test]
    fn test_into_detailed() {
        let response = ApiResponse::new(200, json!({"id": "s1"}));
        let detailed: DetailedResponse<JsonValue> = response.into_detailed().unwrap();
        assert_eq!(detailed.status, 200);
        assert_eq!(detailed.result["id"], "s1");
    }
}
