//! Query text rendering

use super::types::QueryShape;
use crate::error::Result;
use crate::model::PageCursor;
use crate::template;
use serde_json::{json, Value};
use std::fmt::Write;

/// Build the query text for one page of `shape`
///
/// `cursor` is the `endCursor` of the previous page, or `None` for the
/// first page. When absent no `after` argument is emitted at all.
pub fn build_query(shape: &QueryShape, cursor: Option<&PageCursor>) -> Result<String> {
    template::render(shape.template(), &shape.context(cursor))
}

/// Request payload POSTed to the endpoint
pub fn request_body(query: &str) -> Value {
    json!({ "query": query })
}

/// Quote `value` as a GraphQL string literal
///
/// Ordinary token characters pass through unchanged.
pub fn graphql_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
