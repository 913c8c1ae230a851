//! Records returned by the traffic-data API
//!
//! Everything here is built fresh for each call and handed to the caller
//! by value. Only [`TrafficVolumeResult::records`] grows while a traversal
//! is running.

use crate::error::{Error, Result};
use crate::types::Granularity;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Pagination
// ============================================================================

/// Opaque pagination token issued by the server
///
/// Never built from anything but a server response, never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(String);

impl PageCursor {
    /// Wrap a token received from the server
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token exactly as the server sent it
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-page pagination metadata (`pageInfo`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageInfo {
    /// Whether the server has more pages after this one
    pub has_next_page: bool,
    /// Cursor to pass as `after` for the next page
    pub end_cursor: Option<PageCursor>,
}

// ============================================================================
// Volume
// ============================================================================

/// Traffic volume for one time bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeRecord {
    /// Start of the bucket
    pub from_time: DateTime<FixedOffset>,
    /// End of the bucket
    pub to_time: DateTime<FixedOffset>,
    /// Vehicles counted in the bucket
    pub total_count: u64,
    /// Share of the bucket covered by measurements, 0-100
    pub coverage_percentage: f64,
}

/// All volume records for one point and time range, in fetch order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficVolumeResult {
    /// Traffic registration point the volumes belong to
    pub point_id: String,
    /// Bucket size of the records
    pub granularity: Granularity,
    /// Records in the order pages and edges were received
    pub records: Vec<VolumeRecord>,
}

impl TrafficVolumeResult {
    /// Create an empty result
    pub fn new(point_id: impl Into<String>, granularity: Granularity) -> Self {
        Self {
            point_id: point_id.into(),
            granularity,
            records: Vec::new(),
        }
    }

    /// Append one page worth of records
    pub fn extend(&mut self, records: impl IntoIterator<Item = VolumeRecord>) {
        self.records.extend(records);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were returned
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `total_count` over all records
    pub fn total_volume(&self) -> u64 {
        self.records.iter().map(|r| r.total_count).sum()
    }
}

// ============================================================================
// Registration Points
// ============================================================================

/// A traffic registration point (counting station)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationPoint {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

// ============================================================================
// Time Range
// ============================================================================

/// Half-open time range `[from, to)` for a volume query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
}

impl TimeRange {
    /// Create a range, rejecting `from` after `to`
    pub fn new(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> Result<Self> {
        if from > to {
            return Err(Error::invalid_argument(
                "from",
                format!("{} is after {}", from.to_rfc3339(), to.to_rfc3339()),
            ));
        }
        Ok(Self { from, to })
    }

    /// Parse both ends from ISO-8601 text, e.g. `2024-01-01T00:00:00+01:00`
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Self::new(parse_timestamp("from", from)?, parse_timestamp("to", to)?)
    }

    /// Start formatted for a query argument
    pub fn from_arg(&self) -> String {
        self.from.to_rfc3339()
    }

    /// End formatted for a query argument
    pub fn to_arg(&self) -> String {
        self.to.to_rfc3339()
    }
}

fn parse_timestamp(name: &str, text: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text.trim()).map_err(|e| {
        Error::invalid_argument(name, format!("'{text}' is not an ISO-8601 timestamp: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, hour, 0, 0)
            .unwrap()
    }

    fn record(hour: u32, count: u64) -> VolumeRecord {
        VolumeRecord {
            from_time: ts(hour),
            to_time: ts(hour + 1),
            total_count: count,
            coverage_percentage: 100.0,
        }
    }

    #[test]
    fn test_page_cursor_is_opaque() {
        let cursor = PageCursor::new("MjAyNC0wMS0wMVQwMDowMA==");
        assert_eq!(cursor.as_str(), "MjAyNC0wMS0wMVQwMDowMA==");
        assert_eq!(cursor.to_string(), "MjAyNC0wMS0wMVQwMDowMA==");
    }

    #[test]
    fn test_result_accumulates_in_order() {
        let mut result = TrafficVolumeResult::new("17949V320695", Granularity::Hour);
        assert!(result.is_empty());

        result.extend(vec![record(0, 10), record(1, 20)]);
        result.extend(vec![record(2, 5)]);

        assert_eq!(result.len(), 3);
        assert_eq!(result.total_volume(), 35);
        let counts: Vec<u64> = result.records.iter().map(|r| r.total_count).collect();
        assert_eq!(counts, vec![10, 20, 5]);
    }

    #[test]
    fn test_time_range_parse() {
        let range = TimeRange::parse("2024-01-01T00:00:00+01:00", "2024-01-02T00:00:00+01:00")
            .unwrap();
        assert_eq!(range.from_arg(), "2024-01-01T00:00:00+01:00");
        assert_eq!(range.to_arg(), "2024-01-02T00:00:00+01:00");
    }

    #[test]
    fn test_time_range_parse_utc() {
        let range = TimeRange::parse("2024-01-01T00:00:00Z", "2024-01-01T12:00:00Z").unwrap();
        assert_eq!(range.from_arg(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_time_range_rejects_garbage() {
        let err = TimeRange::parse("yesterday", "2024-01-01T00:00:00Z").unwrap_err();
        assert!(err.to_string().contains("'from'"));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_time_range_rejects_reversed() {
        let err = TimeRange::new(ts(5), ts(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));

        // Empty range is allowed
        assert!(TimeRange::new(ts(1), ts(1)).is_ok());
    }

    #[test]
    fn test_volume_record_serializes_iso_timestamps() {
        let json = serde_json::to_value(record(0, 42)).unwrap();
        assert_eq!(json["from_time"], "2024-01-01T00:00:00+01:00");
        assert_eq!(json["to_time"], "2024-01-01T01:00:00+01:00");
        assert_eq!(json["total_count"], 42);
    }
}
