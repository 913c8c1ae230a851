//! Decoder types and traits
//!
//! Defines the core decoder abstraction and the wire format of the
//! service's response nodes.

use crate::error::Result;
use crate::model::PageInfo;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

/// Items of one page plus its pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPage<T> {
    /// Items in edge order
    pub items: Vec<T>,
    /// `pageInfo` of the page; `None` when the server sent none
    pub page_info: Option<PageInfo>,
}

impl<T> DecodedPage<T> {
    /// A page that carries no pagination metadata
    pub fn single(items: Vec<T>) -> Self {
        Self {
            items,
            page_info: None,
        }
    }
}

/// Maps the payload located at a query's data path into typed items
pub trait PageDecoder: Send + Sync {
    /// Item produced for each node
    type Item: Send;

    /// Decode one page
    ///
    /// `body` is the raw response text, kept for error reporting.
    fn decode(&self, payload: Value, body: &str) -> Result<DecodedPage<Self::Item>>;
}

// ============================================================================
// Wire Format
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct WireEdge<T> {
    pub node: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireVolumeNode {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
    pub total: WireVolumeTotal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireVolumeTotal {
    pub volume_numbers: WireVolumeNumbers,
    pub coverage: WireCoverage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireVolumeNumbers {
    pub volume: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCoverage {
    pub percentage: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRegistrationPoint {
    pub id: String,
    pub name: String,
    pub location: WireLocation,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLocation {
    pub coordinates: WireCoordinates,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireCoordinates {
    pub lat_lon: WireLatLon,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLatLon {
    pub lat: f64,
    pub lon: f64,
}
