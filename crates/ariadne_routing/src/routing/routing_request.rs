use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{geopoint::GeoPoint, types::NodeId};

use super::shortest_path_algorithm::ShortestPathOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingAlgorithm {
    Dijkstra,
    #[default]
    Astar,
    AstarEnhanced,
}

impl RoutingAlgorithm {
    pub const ALL: [RoutingAlgorithm; 3] = [
        RoutingAlgorithm::Dijkstra,
        RoutingAlgorithm::Astar,
        RoutingAlgorithm::AstarEnhanced,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RoutingAlgorithm::Dijkstra => "dijkstra",
            RoutingAlgorithm::Astar => "astar",
            RoutingAlgorithm::AstarEnhanced => "astar_enhanced",
        }
    }
}

impl fmt::Display for RoutingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoutingAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().replace('-', "_").as_str() {
            "dijkstra" => Ok(RoutingAlgorithm::Dijkstra),
            "astar" | "a_star" => Ok(RoutingAlgorithm::Astar),
            "astar_enhanced" | "a_star_enhanced" => Ok(RoutingAlgorithm::AstarEnhanced),
            other => Err(format!("Unknown routing algorithm: {other}")),
        }
    }
}

/// One end of a route, either a graph node or a coordinate snapped to the closest node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteEndpoint {
    Node(NodeId),
    Point(GeoPoint),
}

impl From<NodeId> for RouteEndpoint {
    fn from(value: NodeId) -> Self {
        RouteEndpoint::Node(value)
    }
}

impl From<GeoPoint> for RouteEndpoint {
    fn from(value: GeoPoint) -> Self {
        RouteEndpoint::Point(value)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RoutingRequestOptions {
    pub algorithm: Option<RoutingAlgorithm>,
    pub max_iterations: Option<usize>,
}

impl From<RoutingRequestOptions> for ShortestPathOptions {
    fn from(value: RoutingRequestOptions) -> Self {
        ShortestPathOptions {
            max_iterations: value.max_iterations,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RoutingRequest {
    pub start: RouteEndpoint,
    pub end: RouteEndpoint,
    pub options: Option<RoutingRequestOptions>,
}

impl RoutingRequest {
    pub fn new(start: impl Into<RouteEndpoint>, end: impl Into<RouteEndpoint>) -> Self {
        RoutingRequest {
            start: start.into(),
            end: end.into(),
            options: None,
        }
    }

    pub fn between_nodes(start: NodeId, end: NodeId) -> Self {
        Self::new(start, end)
    }

    pub fn between_points(start: GeoPoint, end: GeoPoint) -> Self {
        Self::new(start, end)
    }

    pub fn with_algorithm(mut self, algorithm: RoutingAlgorithm) -> Self {
        self.options.get_or_insert_with(Default::default).algorithm = Some(algorithm);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.options.get_or_insert_with(Default::default).max_iterations = Some(max_iterations);
        self
    }

    pub fn algorithm(&self) -> RoutingAlgorithm {
        self.options
            .and_then(|options| options.algorithm)
            .unwrap_or_default()
    }
}
