//! Page traversal
//!
//! Drives fetch, decode, accumulate and continue for one query until the
//! server reports no further pages.

use super::types::{decide_next, Continuation, PaginationState, TraversalState};
use crate::decode::{locate_payload, PageDecoder, VolumeDecoder};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::model::{PageCursor, TimeRange, TrafficVolumeResult};
use crate::query::{build_query, QueryShape};
use crate::types::Granularity;
use futures::stream::{self, Stream};
use tracing::{debug, info, warn};

/// Traversal over `byHour` / `byDay` pages
pub type VolumeTraversal<'a, T> = PageTraversal<'a, T, VolumeDecoder>;

/// Sequential traversal of one paginated query
///
/// Requests are issued one at a time; the next page is requested only after
/// the previous one has been decoded. Each traversal owns its cursor and
/// counters, so independent traversals share nothing.
///
/// Use [`PageTraversal::next_page`] or [`PageTraversal::into_stream`] to
/// consume page batches lazily (dropping the traversal stops it), or
/// [`PageTraversal::collect_items`] to accumulate everything.
pub struct PageTraversal<'a, T: Transport + ?Sized, D: PageDecoder> {
    transport: &'a T,
    endpoint: String,
    shape: QueryShape,
    decoder: D,
    state: PaginationState,
}

impl<'a, T: Transport + ?Sized, D: PageDecoder> PageTraversal<'a, T, D> {
    /// Create a traversal; nothing is sent until the first page is requested
    pub fn new(
        transport: &'a T,
        endpoint: impl Into<String>,
        shape: QueryShape,
        decoder: D,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            shape,
            decoder,
            state: PaginationState::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> TraversalState {
        self.state.state
    }

    /// Pages received so far
    pub fn pages_fetched(&self) -> u32 {
        self.state.pages_fetched
    }

    /// Items received so far
    pub fn records_fetched(&self) -> u64 {
        self.state.records_fetched
    }

    /// Fetch the next page
    ///
    /// Returns `Ok(None)` once the traversal is done. The first error moves
    /// the traversal to [`TraversalState::Failed`] and is returned; every
    /// later call returns `Ok(None)`.
    pub async fn next_page(&mut self) -> Result<Option<Vec<D::Item>>> {
        if self.state.is_terminal() {
            return Ok(None);
        }

        match self.fetch_page().await {
            Ok(items) => Ok(Some(items)),
            Err(e) => {
                self.state.mark_failed();
                warn!(
                    "Traversal failed after {} pages: {e}",
                    self.state.pages_fetched
                );
                Err(e)
            }
        }
    }

    async fn fetch_page(&mut self) -> Result<Vec<D::Item>> {
        let query = build_query(&self.shape, self.state.cursor.as_ref())?;
        debug!(
            "Requesting page {} (cursor: {})",
            self.state.pages_fetched + 1,
            self.state
                .cursor
                .as_ref()
                .map_or("<none>", PageCursor::as_str)
        );

        let response = self.transport.send(&self.endpoint, &query).await?;
        let payload = locate_payload(response.status, &response.body, &self.shape.data_path())?;
        let page = self.decoder.decode(payload, &response.body)?;

        self.state.accept_page(page.items.len());
        debug!(
            "Page {}: {} items",
            self.state.pages_fetched,
            page.items.len()
        );

        match decide_next(page.page_info.as_ref(), self.state.cursor.as_ref()) {
            Continuation::Continue(cursor) => self.state.advance(cursor),
            Continuation::Done => {
                self.state.mark_done();
                info!(
                    "Traversal complete: {} records in {} pages",
                    self.state.records_fetched, self.state.pages_fetched
                );
            }
            Continuation::MissingCursor => {
                return Err(Error::shape(
                    "server reported another page but sent no cursor",
                    response.body,
                ));
            }
            Continuation::Stalled(cursor) => {
                return Err(Error::shape(
                    format!("server returned cursor '{cursor}' again without advancing"),
                    response.body,
                ));
            }
        }

        Ok(page.items)
    }

    /// Fetch every page and return all items in fetch order
    ///
    /// Nothing is returned if any page fails.
    pub async fn collect_items(mut self) -> Result<Vec<D::Item>> {
        let mut items = Vec::new();
        while let Some(batch) = self.next_page().await? {
            items.extend(batch);
        }
        Ok(items)
    }

    /// Turn the traversal into a stream of page batches
    ///
    /// The stream ends after the last page or after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<D::Item>>> + 'a
    where
        D: 'a,
    {
        stream::try_unfold(self, |mut traversal| async move {
            let batch = traversal.next_page().await?;
            Ok::<_, Error>(batch.map(|items| (items, traversal)))
        })
    }
}

impl<'a, T: Transport + ?Sized> PageTraversal<'a, T, VolumeDecoder> {
    /// Traversal over the hourly or daily volume at one point
    pub fn volume(
        transport: &'a T,
        endpoint: impl Into<String>,
        point_id: impl Into<String>,
        granularity: Granularity,
        range: TimeRange,
    ) -> Self {
        Self::new(
            transport,
            endpoint,
            QueryShape::volume(point_id, granularity, range),
            VolumeDecoder,
        )
    }

    /// Fetch every page into a [`TrafficVolumeResult`]
    pub async fn collect(self) -> Result<TrafficVolumeResult> {
        let (point_id, granularity) = match &self.shape {
            QueryShape::Volume {
                point_id,
                granularity,
                ..
            } => (point_id.clone(), *granularity),
            QueryShape::RegistrationPoints { .. } => {
                return Err(Error::Other(
                    "volume traversal built for a registration points query".to_string(),
                ))
            }
        };

        let mut result = TrafficVolumeResult::new(point_id, granularity);
        result.extend(self.collect_items().await?);
        Ok(result)
    }
}
