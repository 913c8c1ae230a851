//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, VolumeArgs};
use crate::client::TrafficClient;
use crate::config::ClientConfig;
use crate::error::{Result, ResultExt};
use crate::model::{RegistrationPoint, TimeRange, VolumeRecord};
use crate::types::{Granularity, RoadCategory};
use futures::TryStreamExt;
use serde::Serialize;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        debug!("Using endpoint {}", config.endpoint);
        let client = TrafficClient::new(&config)?;

        match &self.cli.command {
            Commands::Points { road_category } => self.points(&client, *road_category).await,
            Commands::Hourly(args) => self.volume(&client, args, Granularity::Hour).await,
            Commands::Daily(args) => self.volume(&client, args, Granularity::Day).await,
        }
    }

    /// Load the configuration file, if any, and apply flag overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ClientConfig::default(),
        };
        if let Some(endpoint) = &self.cli.endpoint {
            config = config.with_endpoint(endpoint.as_str());
        }
        Ok(config)
    }

    async fn points(&self, client: &TrafficClient, road_category: RoadCategory) -> Result<()> {
        let points = client.registration_points(road_category.as_str()).await?;
        match self.cli.format {
            OutputFormat::Json => print_json(&points)?,
            OutputFormat::Pretty => {
                for point in &points {
                    println!("{}", format_point(point));
                }
            }
        }
        Ok(())
    }

    async fn volume(
        &self,
        client: &TrafficClient,
        args: &VolumeArgs,
        granularity: Granularity,
    ) -> Result<()> {
        let range = TimeRange::parse(&args.from, &args.to)?;
        info!(
            "Fetching {granularity} volume for {} from {} to {}",
            args.point,
            range.from_arg(),
            range.to_arg()
        );

        match self.cli.format {
            OutputFormat::Json => {
                let result = client.volume(&args.point, granularity, range).collect().await?;
                print_json(&result)?;
            }
            OutputFormat::Pretty => {
                // Print each page as it arrives
                let stream = client.volume(&args.point, granularity, range).into_stream();
                futures::pin_mut!(stream);

                let mut total = 0u64;
                while let Some(batch) = stream.try_next().await? {
                    for record in &batch {
                        total += record.total_count;
                        println!("{}", format_record(record));
                    }
                }
                println!("Total: {total}");
            }
        }
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_point(point: &RegistrationPoint) -> String {
    format!(
        "ID: {}, Name: {}, Lat: {}, Lon: {}",
        point.id, point.name, point.latitude, point.longitude
    )
}

fn format_record(record: &VolumeRecord) -> String {
    format!(
        "{} - {}: {} ({}% coverage)",
        record.from_time.to_rfc3339(),
        record.to_time.to_rfc3339(),
        record.total_count,
        record.coverage_percentage
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogLevel;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_points_defaults() {
        let cli = parse(&["trafikk", "points"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert!(cli.endpoint.is_none());
        match cli.command {
            Commands::Points { road_category } => assert_eq!(road_category, RoadCategory::E),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_hourly_with_global_flags() {
        let cli = parse(&[
            "trafikk",
            "hourly",
            "--point",
            "97411V72313",
            "--from",
            "2024-01-01T00:00:00+01:00",
            "--to",
            "2024-01-02T00:00:00+01:00",
            "--format",
            "pretty",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.log_level, LogLevel::Debug);
        match cli.command {
            Commands::Hourly(args) => {
                assert_eq!(args.point, "97411V72313");
                assert_eq!(args.from, "2024-01-01T00:00:00+01:00");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_road_category() {
        let cli = parse(&["trafikk", "points", "--road-category", "k"]);
        match cli.command {
            Commands::Points { road_category } => assert_eq!(road_category, RoadCategory::K),
            other => panic!("unexpected command: {other:?}"),
        }

        let result = Cli::try_parse_from(["trafikk", "points", "--road-category", "E] {x"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["trafikk", "points", "--road-category", "X"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_volume_requires_point() {
        let result = Cli::try_parse_from(["trafikk", "daily", "--from", "a", "--to", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_endpoint_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: \"https://from-file.example/\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let runner = Runner::new(parse(&["trafikk", "--config", &path, "points"]));
        assert_eq!(runner.load_config().unwrap().endpoint, "https://from-file.example/");

        let runner = Runner::new(parse(&[
            "trafikk",
            "--config",
            &path,
            "--endpoint",
            "http://localhost:9999/",
            "points",
        ]));
        assert_eq!(runner.load_config().unwrap().endpoint, "http://localhost:9999/");
    }

    #[test]
    fn test_format_point() {
        let point = RegistrationPoint {
            id: "97411V72313".to_string(),
            name: "Test".to_string(),
            latitude: 60.5,
            longitude: 10.25,
        };
        assert_eq!(
            format_point(&point),
            "ID: 97411V72313, Name: Test, Lat: 60.5, Lon: 10.25"
        );
    }

    #[tokio::test]
    async fn test_run_points_against_mock_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("roadCategoryIds: [E]"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"trafficRegistrationPoints": [{
                    "id": "1",
                    "name": "A",
                    "location": {"coordinates": {"latLon": {"lat": 1.0, "lon": 2.0}}}
                }]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let runner = Runner::new(parse(&["trafikk", "--endpoint", &server.uri(), "points"]));
        runner.run().await.unwrap();
    }

    #[tokio::test]
    async fn test_run_rejects_reversed_range() {
        let runner = Runner::new(parse(&[
            "trafikk",
            "--endpoint",
            "http://localhost:1/",
            "daily",
            "--point",
            "1",
            "--from",
            "2024-02-01T00:00:00Z",
            "--to",
            "2024-01-01T00:00:00Z",
        ]));
        let err = runner.run().await.unwrap_err();
        assert!(matches!(err, crate::Error::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_run_reports_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let path = path.to_string_lossy().to_string();

        let runner = Runner::new(parse(&["trafikk", "--config", &path, "points"]));
        let err = runner.run().await.unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
        assert!(err.to_string().contains("missing.yaml"));
    }
}
