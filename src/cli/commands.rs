//! CLI commands and argument parsing

use crate::types::{LogLevel, RoadCategory};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query traffic registration points and volumes
#[derive(Parser, Debug)]
#[command(name = "trafikk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// GraphQL endpoint, overrides the configuration file
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log level (also honours RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registration points for a road category
    Points {
        /// Road category
        #[arg(short, long, default_value = "E", ignore_case = true)]
        road_category: RoadCategory,
    },

    /// Hourly traffic volume at a registration point
    Hourly(VolumeArgs),

    /// Daily traffic volume at a registration point
    Daily(VolumeArgs),
}

/// Arguments shared by the volume commands
#[derive(clap::Args, Debug)]
pub struct VolumeArgs {
    /// Registration point id
    #[arg(short, long)]
    pub point: String,

    /// Start of the range (RFC 3339, inclusive)
    #[arg(long)]
    pub from: String,

    /// End of the range (RFC 3339, exclusive)
    #[arg(long)]
    pub to: String,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON document with the complete result
    Json,
    /// Human-readable lines, printed as pages arrive
    Pretty,
}
