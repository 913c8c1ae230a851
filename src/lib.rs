// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # trafikk-client
//!
//! Client for a public traffic-data GraphQL API: registration points and
//! hourly or daily traffic volumes, with transparent cursor pagination.
//!
//! ## Features
//!
//! - **Query building**: GraphQL documents rendered from fixed templates
//! - **Cursor pagination**: `byHour` / `byDay` pages followed until exhausted
//! - **Typed results**: chrono timestamps, counts and coverage per bucket
//! - **Error taxonomy**: transport, protocol and shape failures kept apart
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trafikk_client::{ClientConfig, TimeRange, TrafficClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = TrafficClient::new(&ClientConfig::default())?;
//!
//!     let points = client.registration_points("E").await?;
//!     println!("{} points", points.len());
//!
//!     let range = TimeRange::parse("2024-01-01T00:00:00+01:00", "2024-01-02T00:00:00+01:00")?;
//!     let volume = client.volume_by_hour("97411V72313", range).await?;
//!     println!("{} vehicles", volume.total_volume());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        TrafficClient                         │
//! │  registration_points()  volume_by_hour()  volume_by_day()    │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────┬────────────────┴─────┬──────────────┬──────────┐
//! │    Query    │      Pagination      │    Decode    │   HTTP   │
//! ├─────────────┼──────────────────────┼──────────────┼──────────┤
//! │ Templates   │ Cursor state machine │ Envelope     │ POST     │
//! │ Escaping    │ Lazy page stream     │ Volume edges │ Timeout  │
//! │ `after:`    │ Accumulation         │ Points       │ Headers  │
//! └─────────────┴──────────────────────┴──────────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Domain records returned to callers
pub mod model;

/// Template interpolation
pub mod template;

/// GraphQL query construction
pub mod query;

/// Response envelope checks and page decoders
pub mod decode;

/// HTTP transport
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Client configuration
pub mod config;

/// Caller-facing client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use types::*;

// Re-export commonly used types
pub use client::TrafficClient;
pub use config::ClientConfig;
pub use model::{
    PageCursor, PageInfo, RegistrationPoint, TimeRange, TrafficVolumeResult, VolumeRecord,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
