//! Pagination types
//!
//! Cursor state machine shared by every traversal.

use crate::model::{PageCursor, PageInfo};

/// Where a traversal is in its fetch/accumulate cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalState {
    /// A page request is due (initial state)
    #[default]
    Fetching,
    /// A page was received and its items are being taken in
    Accumulating,
    /// The server reported no further pages
    Done,
    /// A request or response failed; nothing more will be fetched
    Failed,
}

impl TraversalState {
    /// Whether no further page will be requested
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// Outcome of reading one page's `pageInfo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// Request the next page with this cursor
    Continue(PageCursor),
    /// No more pages
    Done,
    /// `hasNextPage` was true but no cursor came with it
    MissingCursor,
    /// The server handed back the cursor that was just sent
    Stalled(PageCursor),
}

/// Decide whether to fetch another page
///
/// Reads `hasNextPage` and `endCursor` together. Missing metadata stops
/// the traversal; a next page with no cursor to reach it by is reported as
/// [`Continuation::MissingCursor`].
pub fn decide_next(page_info: Option<&PageInfo>, sent: Option<&PageCursor>) -> Continuation {
    let Some(info) = page_info else {
        return Continuation::Done;
    };
    if !info.has_next_page {
        return Continuation::Done;
    }
    match &info.end_cursor {
        None => Continuation::MissingCursor,
        Some(cursor) if Some(cursor) == sent => Continuation::Stalled(cursor.clone()),
        Some(cursor) => Continuation::Continue(cursor.clone()),
    }
}

/// Tracks pagination state during a traversal
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Cursor for the next request (`None` before the first page)
    pub cursor: Option<PageCursor>,
    /// Current state
    pub state: TraversalState,
    /// Pages received so far
    pub pages_fetched: u32,
    /// Items received so far
    pub records_fetched: u64,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a received page and move to `Accumulating`
    pub fn accept_page(&mut self, item_count: usize) {
        self.state = TraversalState::Accumulating;
        self.pages_fetched += 1;
        self.records_fetched += item_count as u64;
    }

    /// Set the cursor for the next request and move to `Fetching`
    pub fn advance(&mut self, cursor: PageCursor) {
        self.cursor = Some(cursor);
        self.state = TraversalState::Fetching;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.state = TraversalState::Done;
    }

    /// Mark pagination as failed
    pub fn mark_failed(&mut self) {
        self.state = TraversalState::Failed;
    }

    /// Whether no further page will be requested
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}
