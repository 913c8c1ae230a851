//! Common types used throughout trafikk-client
//!
//! Shared enums and small utility traits used across modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Granularity
// ============================================================================

/// Time bucket size of a volume query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// One record per hour (`byHour`)
    Hour,
    /// One record per day (`byDay`)
    Day,
}

impl Granularity {
    /// Name of the GraphQL connection field for this granularity
    pub fn connection_field(self) -> &'static str {
        match self {
            Granularity::Hour => "byHour",
            Granularity::Day => "byDay",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Hour => write!(f, "hourly"),
            Granularity::Day => write!(f, "daily"),
        }
    }
}

// ============================================================================
// Road Category
// ============================================================================

/// Road category of a registration point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum RoadCategory {
    /// European route
    #[value(name = "E")]
    E,
    /// National road
    #[value(name = "R")]
    R,
    /// County road
    #[value(name = "F")]
    F,
    /// Municipal road
    #[value(name = "K")]
    K,
    /// Private road
    #[value(name = "P")]
    P,
}

impl RoadCategory {
    /// GraphQL enum literal for this category
    pub fn as_str(self) -> &'static str {
        match self {
            RoadCategory::E => "E",
            RoadCategory::R => "R",
            RoadCategory::F => "F",
            RoadCategory::K => "K",
            RoadCategory::P => "P",
        }
    }
}

impl fmt::Display for RoadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_connection_field() {
        assert_eq!(Granularity::Hour.connection_field(), "byHour");
        assert_eq!(Granularity::Day.connection_field(), "byDay");
    }

    #[test]
    fn test_granularity_serde() {
        let g: Granularity = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(g, Granularity::Day);

        let json = serde_json::to_string(&Granularity::Hour).unwrap();
        assert_eq!(json, "\"hour\"");
    }

    #[test]
    fn test_road_category_literal() {
        assert_eq!(RoadCategory::E.as_str(), "E");
        assert_eq!(RoadCategory::K.to_string(), "K");
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!("test".to_string().none_if_empty(), Some("test".to_string()));
        assert_eq!(String::new().none_if_empty(), None);
    }
}
