//! Pagination module
//!
//! List endpoints return a bounded page of items plus an optional
//! `next.href` link whose `offset` query parameter addresses the following
//! page. [`Pager`] hides that bookkeeping behind `has_next`/`get_next`/`get_all`
//! for any [`ListOperation`].
//!
//! ```rust,ignore
//! let mut pager = client.pager(ListTopicsOptions::new(instance_id))?;
//! while pager.has_next() {
//!     for topic in pager.get_next().await? {
//!         println!("{}", topic.name);
//!     }
//! }
//! ```

mod pager;
mod types;

pub use pager::Pager;
pub use types::{query_param, ListOperation};

use crate::service::{
    ListDestinationsOptions, ListIntegrationsOptions, ListSmtpConfigurationsOptions,
    ListSmtpUsersOptions, ListSourcesOptions, ListSubscriptionsOptions,
    ListTagsSubscriptionOptions, ListTemplatesOptions, ListTopicsOptions,
};

pub type SourcesPager = Pager<ListSourcesOptions>;
pub type TopicsPager = Pager<ListTopicsOptions>;
pub type TemplatesPager = Pager<ListTemplatesOptions>;
pub type DestinationsPager = Pager<ListDestinationsOptions>;
pub type SubscriptionsPager = Pager<ListSubscriptionsOptions>;
pub type IntegrationsPager = Pager<ListIntegrationsOptions>;
pub type SmtpConfigurationsPager = Pager<ListSmtpConfigurationsOptions>;
pub type SmtpUsersPager = Pager<ListSmtpUsersOptions>;
pub type TagsSubscriptionPager = Pager<ListTagsSubscriptionOptions>;
