//! Caller-facing API
//!
//! [`TrafficClient`] bundles an endpoint with a [`Transport`] and exposes
//! one method per resource. Every method returns a fully materialised
//! result or the first error; [`TrafficClient::volume`] gives access to the
//! lazy page traversal instead.

use crate::config::ClientConfig;
use crate::decode::RegistrationPointDecoder;
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::model::{RegistrationPoint, TimeRange, TrafficVolumeResult};
use crate::pagination::{PageTraversal, VolumeTraversal};
use crate::query::QueryShape;
use crate::types::Granularity;
use tracing::info;

/// Client for the traffic-data GraphQL API
#[derive(Debug)]
pub struct TrafficClient<T: Transport = HttpClient> {
    endpoint: String,
    transport: T,
}

impl TrafficClient<HttpClient> {
    /// Create a client using the HTTP transport
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::with_transport(config.endpoint.clone(), transport))
    }
}

impl<T: Transport> TrafficClient<T> {
    /// Create a client with a custom transport
    pub fn with_transport(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    /// Endpoint the client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Registration points for a road category (`E`, `R`, `F`, `K`, `P`)
    pub async fn registration_points(
        &self,
        road_category: &str,
    ) -> Result<Vec<RegistrationPoint>> {
        let points = PageTraversal::new(
            &self.transport,
            self.endpoint.as_str(),
            QueryShape::registration_points(road_category),
            RegistrationPointDecoder,
        )
        .collect_items()
        .await?;

        info!(
            "Fetched {} registration points for road category {road_category}",
            points.len()
        );
        Ok(points)
    }

    /// Hourly traffic volume at a point
    pub async fn volume_by_hour(
        &self,
        point_id: &str,
        range: TimeRange,
    ) -> Result<TrafficVolumeResult> {
        self.volume(point_id, Granularity::Hour, range).collect().await
    }

    /// Daily traffic volume at a point
    pub async fn volume_by_day(
        &self,
        point_id: &str,
        range: TimeRange,
    ) -> Result<TrafficVolumeResult> {
        self.volume(point_id, Granularity::Day, range).collect().await
    }

    /// Lazy traversal over volume pages at a point
    pub fn volume(
        &self,
        point_id: &str,
        granularity: Granularity,
        range: TimeRange,
    ) -> VolumeTraversal<'_, T> {
        PageTraversal::volume(
            &self.transport,
            self.endpoint.as_str(),
            point_id,
            granularity,
            range,
        )
    }
}
