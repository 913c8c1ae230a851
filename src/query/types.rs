//! Query shape descriptors
//!
//! Defines the resources that can be queried and their templates.

use crate::model::{PageCursor, TimeRange};
use crate::template::TemplateContext;
use crate::types::Granularity;

use super::builder::graphql_string;

/// Query template for traffic registration points
pub const REGISTRATION_POINTS_TEMPLATE: &str = r"{
  trafficRegistrationPoints(searchQuery: {roadCategoryIds: [{{ road_category }}]}) {
    id
    name
    location {
      coordinates {
        latLon {
          lat
          lon
        }
      }
    }
  }
}";

/// Query template for hourly and daily traffic volume
pub const VOLUME_TEMPLATE: &str = r"{
  trafficData(trafficRegistrationPointId: {{ point_id }}) {
    volume {
      {{ connection }}(from: {{ from }}, to: {{ to }}{{ after }}) {
        pageInfo {
          hasNextPage
          endCursor
        }
        edges {
          node {
            from
            to
            total {
              volumeNumbers {
                volume
              }
              coverage {
                percentage
              }
            }
          }
        }
      }
    }
  }
}";

/// A resource to query, with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryShape {
    /// Registration points for one or more road categories (single page)
    RegistrationPoints {
        /// Road category id(s) as GraphQL enum literals, e.g. `E` or `E, R`
        road_category: String,
    },

    /// Traffic volume per hour or per day at one point (paginated)
    Volume {
        /// Bucket size
        granularity: Granularity,
        /// Traffic registration point id
        point_id: String,
        /// Requested time range
        range: TimeRange,
    },
}

impl QueryShape {
    /// Registration points query
    pub fn registration_points(road_category: impl Into<String>) -> Self {
        Self::RegistrationPoints {
            road_category: road_category.into(),
        }
    }

    /// Volume query
    pub fn volume(point_id: impl Into<String>, granularity: Granularity, range: TimeRange) -> Self {
        Self::Volume {
            granularity,
            point_id: point_id.into(),
            range,
        }
    }

    /// Template for this shape
    pub fn template(&self) -> &'static str {
        match self {
            Self::RegistrationPoints { .. } => REGISTRATION_POINTS_TEMPLATE,
            Self::Volume { .. } => VOLUME_TEMPLATE,
        }
    }

    /// Path under `data` where the payload is expected
    pub fn data_path(&self) -> Vec<&'static str> {
        match self {
            Self::RegistrationPoints { .. } => vec!["trafficRegistrationPoints"],
            Self::Volume { granularity, .. } => {
                vec!["trafficData", "volume", granularity.connection_field()]
            }
        }
    }

    /// Template variables for one page request
    ///
    /// The cursor is ignored for shapes that are not paginated.
    pub fn context(&self, cursor: Option<&PageCursor>) -> TemplateContext {
        match self {
            Self::RegistrationPoints { road_category } => {
                TemplateContext::new().with("road_category", road_category.as_str())
            }
            Self::Volume {
                granularity,
                point_id,
                range,
            } => {
                let after = cursor
                    .map(|c| format!(", after: {}", graphql_string(c.as_str())))
                    .unwrap_or_default();
                TemplateContext::new()
                    .with("connection", granularity.connection_field())
                    .with("point_id", graphql_string(point_id))
                    .with("from", graphql_string(&range.from_arg()))
                    .with("to", graphql_string(&range.to_arg()))
                    .with("after", after)
            }
        }
    }
}
