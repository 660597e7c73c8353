//! Transport trait

use super::request::{ApiRequest, ApiResponse};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Sends a fully described request and returns the parsed response
///
/// Implementations return `Error::HttpStatus` for non-2xx responses and
/// `Error::Http`/`Error::Timeout` for network failures.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        (**self).send(request).await
    }
}
