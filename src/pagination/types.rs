//! Pagination types and page parsing

use crate::error::{Error, Result};
use crate::service::Operation;
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A list operation a [`Pager`](super::Pager) can drive
///
/// Every list response nests its items under a resource-specific field
/// (`sources`, `topics`, `tag_subscriptions`, ...) next to the shared paging
/// envelope (`total_count`, `limit`, `offset`, `next.href`).
pub trait ListOperation: Operation + Clone + Send + Sync + 'static {
    /// Element of the item collection
    type Item: DeserializeOwned + Send;

    /// Response field holding the items
    const ITEMS_FIELD: &'static str;
}

/// Iteration state of a pager
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum PagerState {
    /// Nothing fetched yet
    #[default]
    NotStarted,
    /// The last page pointed at another one
    HasMore { offset: String },
    /// The last page had no continuation
    Exhausted,
}

impl PagerState {
    pub(crate) fn has_next(&self) -> bool {
        !matches!(self, PagerState::Exhausted)
    }

    /// Offset to request next; `None` for the first page
    pub(crate) fn offset(&self) -> Option<&str> {
        match self {
            PagerState::HasMore { offset } => Some(offset),
            PagerState::NotStarted | PagerState::Exhausted => None,
        }
    }
}

/// One parsed page
#[derive(Debug)]
pub(crate) struct Page<T> {
    pub items: Vec<T>,
    pub total_count: Option<u64>,
    /// `Some` when `next.href` carried an `offset`
    pub next_offset: Option<String>,
    /// `next.href` was present but had no `offset` in it
    pub dangling_next: bool,
}

/// Extract items and continuation from a list response body
pub(crate) fn parse_page<T: DeserializeOwned>(body: JsonValue, field: &str) -> Result<Page<T>> {
    let Value::Object(mut body) = body else {
        return Err(Error::malformed_page(field));
    };

    let items = match body.remove(field) {
        Some(items @ Value::Array(_)) => serde_json::from_value(items)?,
        _ => return Err(Error::malformed_page(field)),
    };

    let total_count = body.get("total_count").and_then(Value::as_u64);

    let href = body
        .get("next")
        .and_then(|next| next.get("href"))
        .and_then(Value::as_str);
    let next_offset = href.and_then(|href| query_param(href, "offset"));

    Ok(Page {
        items,
        total_count,
        dangling_next: href.is_some() && next_offset.is_none(),
        next_offset,
    })
}

/// Value of a query parameter in an absolute or relative href
pub fn query_param(href: &str, key: &str) -> Option<String> {
    let (_, query) = href.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}
