//! Decoder implementations
//!
//! Status and envelope checks shared by every query, plus one decoder per
//! resource.

use super::types::{
    DecodedPage, PageDecoder, WireEdge, WireRegistrationPoint, WireVolumeNode,
};
use crate::error::{Error, Result};
use crate::model::{PageCursor, PageInfo, RegistrationPoint, VolumeRecord};
use crate::types::OptionStringExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

// ============================================================================
// Envelope
// ============================================================================

/// Validate a response and take the value at `data.<path>`
///
/// Checks, in order:
/// 1. status other than 200 is a transport error carrying the raw body
/// 2. a non-null top-level `errors` member is a protocol error, whatever
///    else the body contains
/// 3. a body that is not JSON, or lacks `data` or any segment of `path`
///    (or has `null` there), is a shape error carrying the full body
pub fn locate_payload(status: u16, body: &str, path: &[&str]) -> Result<Value> {
    if status != 200 {
        return Err(Error::transport(status, body));
    }

    let mut json: Value = serde_json::from_str(body)
        .map_err(|e| Error::shape(format!("response is not valid JSON: {e}"), body))?;

    if let Some(errors) = json.get_mut("errors") {
        if !errors.is_null() {
            return Err(Error::protocol(errors.take()));
        }
    }

    let mut current = match json.get_mut("data") {
        Some(data) if !data.is_null() => data,
        _ => return Err(Error::shape("response has no 'data' member", body)),
    };

    for (depth, segment) in path.iter().enumerate() {
        current = match current.get_mut(*segment) {
            Some(next) if !next.is_null() => next,
            _ => {
                return Err(Error::shape(
                    format!("response is missing 'data.{}'", path[..=depth].join(".")),
                    body,
                ))
            }
        };
    }

    Ok(current.take())
}

/// Deserialize one node, reporting which edge was malformed
fn decode_node<T: DeserializeOwned>(node: Value, index: usize, body: &str) -> Result<T> {
    serde_json::from_value(node)
        .map_err(|e| Error::shape(format!("malformed item at index {index}: {e}"), body))
}

/// Read `pageInfo` from a connection object
///
/// A missing or malformed `pageInfo` yields `None`; a missing
/// `hasNextPage` reads as `false`; an empty `endCursor` reads as absent.
fn read_page_info(connection: &Value) -> Option<PageInfo> {
    let page_info = connection.get("pageInfo")?;
    if !page_info.is_object() {
        if !page_info.is_null() {
            warn!("Ignoring malformed pageInfo: {page_info}");
        }
        return None;
    }

    let has_next_page = page_info
        .get("hasNextPage")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let end_cursor = page_info
        .get("endCursor")
        .and_then(Value::as_str)
        .map(String::from)
        .none_if_empty()
        .map(PageCursor::new);

    Some(PageInfo {
        has_next_page,
        end_cursor,
    })
}

// ============================================================================
// Volume Decoder
// ============================================================================

/// Decodes a `byHour` / `byDay` connection into [`VolumeRecord`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeDecoder;

impl PageDecoder for VolumeDecoder {
    type Item = VolumeRecord;

    fn decode(&self, payload: Value, body: &str) -> Result<DecodedPage<VolumeRecord>> {
        let Value::Object(mut connection) = payload else {
            return Err(Error::shape("volume connection is not an object", body));
        };

        let edges = match connection.remove("edges") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(edges)) => edges,
            Some(_) => return Err(Error::shape("'edges' is not a list", body)),
        };

        let items = edges
            .into_iter()
            .enumerate()
            .map(|(index, edge)| {
                let edge: WireEdge<WireVolumeNode> = decode_node(edge, index, body)?;
                let node = edge.node;
                Ok(VolumeRecord {
                    from_time: node.from,
                    to_time: node.to,
                    total_count: node.total.volume_numbers.volume,
                    coverage_percentage: node.total.coverage.percentage,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DecodedPage {
            items,
            page_info: read_page_info(&Value::Object(connection)),
        })
    }
}

// ============================================================================
// Registration Point Decoder
// ============================================================================

/// Decodes the `trafficRegistrationPoints` list
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationPointDecoder;

impl PageDecoder for RegistrationPointDecoder {
    type Item = RegistrationPoint;

    fn decode(&self, payload: Value, body: &str) -> Result<DecodedPage<RegistrationPoint>> {
        let Value::Array(points) = payload else {
            return Err(Error::shape(
                "'trafficRegistrationPoints' is not a list",
                body,
            ));
        };

        let items = points
            .into_iter()
            .enumerate()
            .map(|(index, point)| {
                let point: WireRegistrationPoint = decode_node(point, index, body)?;
                let lat_lon = point.location.coordinates.lat_lon;
                Ok(RegistrationPoint {
                    id: point.id,
                    name: point.name,
                    latitude: lat_lon.lat,
                    longitude: lat_lon.lon,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DecodedPage::single(items))
    }
}
