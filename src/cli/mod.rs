//! CLI module
//!
//! Command-line interface for querying the traffic-data API.
//!
//! # Commands
//!
//! - `points` - List registration points for a road category
//! - `hourly` - Hourly traffic volume at a point
//! - `daily` - Daily traffic volume at a point

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, VolumeArgs};
pub use runner::Runner;
