//! HTTP transport module
//!
//! Everything between a request builder and the network lives here.
//!
//! # Overview
//!
//! - [`ApiRequest`]: method, templated path, query, body and header overrides
//! - [`Transport`]: the seam every operation and pager sends through
//! - [`HttpClient`]: the reqwest-backed transport with optional retries
//!
//! Swapping the transport for an in-memory fake is how the pagers and
//! request builders are unit tested.

mod client;
mod request;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use request::{ApiRequest, ApiResponse, FormContent, FormPart, RequestBody};
pub use transport::Transport;

#[cfg(test)]
mod tests;
