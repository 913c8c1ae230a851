//! Pagination module
//!
//! Cursor-based traversal of GraphQL connections.
//!
//! # Overview
//!
//! Each page response carries `pageInfo { hasNextPage endCursor }`. The
//! traversal forwards `endCursor` verbatim as the next request's `after`
//! argument while `hasNextPage` is true, and stops as soon as it is false
//! or the metadata is missing. Items are handed out in the order pages
//! and edges arrive.

mod traversal;
mod types;

pub use traversal::{PageTraversal, VolumeTraversal};
pub use types::{decide_next, Continuation, PaginationState, TraversalState};
