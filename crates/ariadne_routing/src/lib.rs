pub mod constants;
pub mod distance;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod graph_edge;
pub mod location_index;
pub mod properties;
pub mod road_graph;
pub mod router;
pub mod routing;
pub mod stopwatch;
pub mod types;
pub mod weighting;

mod test_graph_utils;

pub use error::{GraphError, RoutingError};
pub use geopoint::GeoPoint;
pub use road_graph::{RoadGraph, RoadGraphBuilder};
pub use router::Router;
pub use routing::routing_request::{RouteEndpoint, RoutingAlgorithm, RoutingRequest};
