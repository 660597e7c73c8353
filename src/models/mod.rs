//! Response and request body shapes
//!
//! Field names follow the wire format. Open-ended payloads (destination
//! parameters, subscription attributes, notification extensions) are kept as
//! JSON objects and discriminated by their `type` field where one exists.

mod common;
mod destinations;
mod integrations;
mod metrics;
mod notifications;
mod smtp;
mod sources;
mod subscriptions;
mod templates;
mod topics;

pub use common::PageHref;
pub use destinations::{
    Destination, DestinationConfig, DestinationList, DestinationListItem, DestinationResponse,
    DestinationType, EnabledCountries, EnabledCountryGroup, TagsSubscriptionList,
    TagsSubscriptionListItem, TagsSubscriptionResponse, TestDestinationResponse,
    VerificationResponse, VerificationStatus,
};
pub use integrations::{Integration, IntegrationList, IntegrationMetadata};
pub use metrics::{Bucket, Histogram, Metric, Metrics};
pub use notifications::{BulkNotificationResponse, NotificationCreate, NotificationResponse};
pub use smtp::{
    SmtpAllowedIps, SmtpConfiguration, SmtpConfigurationList, SmtpDomainConfig, SmtpUser,
    SmtpUserList, SmtpVerificationAttributes,
};
pub use sources::{Source, SourceList, SourceListItem, SourceResponse};
pub use subscriptions::{Subscription, SubscriptionList, SubscriptionListItem};
pub use templates::{Template, TemplateConfig, TemplateList, TemplateResponse};
pub use topics::{Rule, SourcesItems, Topic, TopicList, TopicResponse, TopicSource, TopicsListItem};
