//! Delivery metrics

use super::{EventNotifications, Operation};
use crate::error::{Error, Result};
use crate::http::ApiRequest;
use crate::models::Metrics;
use crate::types::{DetailedResponse, StringMap};
use crate::validation::RequiredParams;
use chrono::{DateTime, SecondsFormat, Utc};

/// Delivery counters for a destination type over a time window
#[derive(Debug, Clone, Default)]
pub struct GetMetricsOptions {
    pub instance_id: String,
    /// Destination type, e.g. `smtp_custom`
    pub destination_type: String,
    /// Window start (inclusive)
    pub gte: Option<DateTime<Utc>>,
    /// Window end (inclusive)
    pub lte: Option<DateTime<Utc>>,
    pub destination_id: Option<String>,
    pub source_id: Option<String>,
    pub subscription_id: Option<String>,
    pub email_to: Option<String>,
    pub notification_id: Option<String>,
    pub subject: Option<String>,
    pub headers: StringMap,
}

impl GetMetricsOptions {
    pub fn new(
        instance_id: impl Into<String>,
        destination_type: impl Into<String>,
        gte: DateTime<Utc>,
        lte: DateTime<Utc>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            destination_type: destination_type.into(),
            gte: Some(gte),
            lte: Some(lte),
            ..Default::default()
        }
    }
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Operation for GetMetricsOptions {
    type Output = Metrics;

    fn validate(&self) -> Result<()> {
        RequiredParams::new()
            .text("instance_id", &self.instance_id)
            .text("destination_type", &self.destination_type)
            .some("gte", self.gte.as_ref())
            .some("lte", self.lte.as_ref())
            .check()?;

        match (self.gte, self.lte) {
            (Some(gte), Some(lte)) if gte > lte => Err(Error::invalid_parameter(
                "gte",
                "window start must not be after its end",
            )),
            _ => Ok(()),
        }
    }

    fn to_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::get("/v1/instances/{instance_id}/metrics")
            .path_param("instance_id", self.instance_id.as_str())
            .query("destination_type", &self.destination_type)
            .query_opt("gte", self.gte.as_ref().map(format_time))
            .query_opt("lte", self.lte.as_ref().map(format_time))
            .query_opt("destination_id", self.destination_id.as_deref())
            .query_opt("source_id", self.source_id.as_deref())
            .query_opt("subscription_id", self.subscription_id.as_deref())
            .query_opt("email_to", self.email_to.as_deref())
            .query_opt("notification_id", self.notification_id.as_deref())
            .query_opt("subject", self.subject.as_deref())
            .headers(&self.headers))
    }
}

impl EventNotifications {
    pub async fn get_metrics(
        &self,
        options: &GetMetricsOptions,
    ) -> Result<DetailedResponse<Metrics>> {
        self.execute(options).await
    }
}
