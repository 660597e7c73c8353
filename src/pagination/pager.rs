//! Generic offset pager

use super::types::{parse_page, ListOperation, PagerState};
use crate::error::{Error, Result};
use crate::service::EventNotifications;
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, trace, warn};

/// Walks every page of a list operation
///
/// The pager re-sends the options it was built with, replacing `offset` with
/// the one found in the previous page's `next.href`. Iteration ends when a
/// page carries no `next` link; an empty page with a link is followed.
///
/// A pager is meant for sequential use; `get_next` takes `&mut self`.
#[derive(Debug)]
pub struct Pager<O: ListOperation> {
    client: EventNotifications,
    options: O,
    state: PagerState,
    total_count: Option<u64>,
}

impl<O: ListOperation> Pager<O> {
    /// Create a pager, failing if the options lack required parameters
    pub fn new(client: &EventNotifications, options: O) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            client: client.clone(),
            options,
            state: PagerState::NotStarted,
            total_count: None,
        })
    }

    /// Whether another page may be fetched; performs no I/O
    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    /// `total_count` reported by the most recent page that had one
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// The options every request is built from
    pub fn options(&self) -> &O {
        &self.options
    }

    /// Fetch the next page
    ///
    /// On error the pager keeps its previous state, so the same page can be
    /// requested again.
    pub async fn get_next(&mut self) -> Result<Vec<O::Item>> {
        if !self.state.has_next() {
            return Err(Error::PagerExhausted);
        }

        let mut request = self.options.to_request()?;
        if let Some(offset) = self.state.offset() {
            request = request.query("offset", offset);
        }
        trace!(
            field = O::ITEMS_FIELD,
            offset = ?self.state.offset(),
            "Fetching page"
        );

        let response = self.client.transport().send(request).await?;
        let page = parse_page::<O::Item>(response.result, O::ITEMS_FIELD)?;

        if page.dangling_next {
            warn!(
                field = O::ITEMS_FIELD,
                "Next link has no offset; treating page as the last one"
            );
        }

        debug!(
            field = O::ITEMS_FIELD,
            items = page.items.len(),
            total_count = ?page.total_count,
            has_more = page.next_offset.is_some(),
            "Fetched page"
        );

        if page.total_count.is_some() {
            self.total_count = page.total_count;
        }
        self.state = match page.next_offset {
            Some(offset) => PagerState::HasMore { offset },
            None => PagerState::Exhausted,
        };

        Ok(page.items)
    }

    /// Fetch every remaining page and concatenate the items in page order
    ///
    /// Fails on the first page that fails; items fetched before it are
    /// discarded. Terminates only if the server eventually omits `next`.
    pub async fn get_all(&mut self) -> Result<Vec<O::Item>> {
        let mut items = Vec::new();
        while self.has_next() {
            items.extend(self.get_next().await?);
        }
        Ok(items)
    }

    /// Yield remaining items one by one, fetching pages lazily
    pub fn into_stream(self) -> impl Stream<Item = Result<O::Item>> + Send {
        stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok::<_, Error>(None);
            }
            let items = pager.get_next().await?;
            Ok(Some((
                stream::iter(items.into_iter().map(Ok::<_, Error>)),
                pager,
            )))
        })
        .try_flatten()
    }
}
