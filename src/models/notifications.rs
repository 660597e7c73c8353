//! Notification payloads
//!
//! A notification is a CloudEvents 1.0 envelope. Channel-specific content
//! (`ibmendefaultshort`, `ibmenmailto`, `ibmenfcmbody`, ...) travels as
//! extension attributes next to the core fields.

use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SPEC_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationCreate {
    pub id: String,
    pub source: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub specversion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacontenttype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
    /// Extension attributes
    #[serde(flatten)]
    pub extensions: JsonObject,
}

impl NotificationCreate {
    /// New event with the current time and spec version 1.0
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        event_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            event_type: event_type.into(),
            specversion: SPEC_VERSION.to_string(),
            time: Some(Utc::now()),
            datacontenttype: None,
            data: None,
            extensions: JsonObject::new(),
        }
    }

    #[must_use]
    pub fn data(mut self, data: JsonValue) -> Self {
        self.datacontenttype = Some("application/json".to_string());
        self.data = Some(data);
        self
    }

    /// Set an extension attribute
    #[must_use]
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Id of the source registered with the service (`ibmensourceid`)
    #[must_use]
    pub fn source_id(self, source_id: impl Into<String>) -> Self {
        self.extension("ibmensourceid", source_id.into())
    }

    /// Short fallback text shown by every channel (`ibmendefaultshort`)
    #[must_use]
    pub fn default_short(self, text: impl Into<String>) -> Self {
        self.extension("ibmendefaultshort", text.into())
    }

    /// Long fallback text (`ibmendefaultlong`)
    #[must_use]
    pub fn default_long(self, text: impl Into<String>) -> Self {
        self.extension("ibmendefaultlong", text.into())
    }

    /// Names of required fields that are blank
    pub(crate) fn missing_fields(&self) -> Vec<&'static str> {
        let source_id = self
            .extensions
            .get("ibmensourceid")
            .and_then(JsonValue::as_str)
            .unwrap_or_default();
        [
            ("notification.id", self.id.as_str()),
            ("notification.source", self.source.as_str()),
            ("notification.type", self.event_type.as_str()),
            ("notification.specversion", self.specversion.as_str()),
            ("notification.ibmensourceid", source_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkNotificationResponse {
    #[serde(default)]
    pub bulk_notification_id: Option<String>,
    #[serde(default)]
    pub bulk_messages: Vec<JsonObject>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_serializes_extensions_inline() {
        let mut notification = NotificationCreate::new("n-1", "app/orders", "order.created")
            .source_id("src-1")
            .default_short("Order created")
            .data(json!({"order": 42}));
        notification.time = None;

        assert_eq!(
            serde_json::to_value(&notification).unwrap(),
            json!({
                "id": "n-1",
                "source": "app/orders",
                "type": "order.created",
                "specversion": "1.0",
                "datacontenttype": "application/json",
                "data": {"order": 42},
                "ibmensourceid": "src-1",
                "ibmendefaultshort": "Order created"
            })
        );
    }

    #[test]
    fn test_missing_fields() {
        let notification = NotificationCreate::new("", "src", " ").source_id("src-1");
        assert_eq!(
            notification.missing_fields(),
            ["notification.id", "notification.type"]
        );
    }

    #[test]
    fn test_blank_source_id_is_missing() {
        assert_eq!(
            NotificationCreate::new("n-1", "src", "t").missing_fields(),
            ["notification.ibmensourceid"]
        );
        assert_eq!(
            NotificationCreate::new("n-1", "src", "t")
                .source_id("  ")
                .missing_fields(),
            ["notification.ibmensourceid"]
        );
        assert!(NotificationCreate::new("n-1", "src", "t")
            .source_id("src-1")
            .missing_fields()
            .is_empty());
    }
}
