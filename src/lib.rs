// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Event Notifications client
//!
//! An async Rust client for the Event Notifications REST API: sources,
//! topics, templates, destinations, subscriptions, integrations, SMTP
//! configuration, delivery metrics and notification publishing.
//!
//! ## Features
//!
//! - **Typed operations**: one `*Options` struct per endpoint, validated before any I/O
//! - **Pagination**: a generic [`Pager`] walks `next.href` offsets for every list endpoint
//! - **Pluggable transport**: swap the reqwest client for anything implementing [`Transport`]
//! - **Configuration**: YAML files or `EVENT_NOTIFICATIONS_*` environment variables
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use event_notifications::service::{ListTopicsOptions, SendNotificationsOptions};
//! use event_notifications::{EventNotifications, NotificationCreate, Result, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = EventNotifications::new(&ServiceConfig::from_env()?)?;
//!
//!     let notification = NotificationCreate::new("evt-1", "app/orders", "order.created")
//!         .source_id("src-1")
//!         .default_short("Order created");
//!     client
//!         .send_notifications(&SendNotificationsOptions::new("instance", notification))
//!         .await?;
//!
//!     let topics = client.pager(ListTopicsOptions::new("instance"))?.get_all().await?;
//!     println!("{} topics", topics.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    EventNotifications                       │
//! │  execute(&Options) → DetailedResponse<T>    pager(Options)  │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┴──┬──────────────┬─────────────┐
//! │ Validation │ Operation         │ Pager        │ Transport   │
//! ├────────────┼───────────────────┼──────────────┼─────────────┤
//! │ Required   │ path + query      │ next.href    │ reqwest     │
//! │ params     │ JSON / multipart  │ offset       │ auth, retry │
//! └────────────┴───────────────────┴──────────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Service configuration (YAML and environment)
pub mod config;

/// Request authentication
pub mod auth;

/// HTTP transport with retry
pub mod http;

/// Required-parameter checks
pub mod validation;

/// Request and response bodies
pub mod models;

/// API operations
pub mod service;

/// Offset pagination over list operations
pub mod pagination;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use auth::AuthConfig;
pub use config::ServiceConfig;
pub use http::{ApiRequest, ApiResponse, HttpClient, HttpClientConfig, Transport};
pub use models::*;
pub use pagination::{ListOperation, Pager};
pub use service::{EventNotifications, Operation};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
