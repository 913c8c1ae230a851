//! Query builder module
//!
//! Builds GraphQL query text for one page request.
//!
//! # Overview
//!
//! A [`QueryShape`] names the resource and carries its parameters. One
//! template exists per resource kind; hourly and daily volume share a
//! template and differ only in the connection field. [`build_query`] renders
//! the template, adding the `after` argument only when a cursor is known.

mod builder;
mod types;

pub use builder::{build_query, graphql_string, request_body};
pub use types::{QueryShape, REGISTRATION_POINTS_TEMPLATE, VOLUME_TEMPLATE};
