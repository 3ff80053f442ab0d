use rayon::prelude::*;
use tracing::debug;

use crate::{
    error::RoutingError,
    graph::Graph,
    location_index::LocationIndex,
    road_graph::RoadGraph,
    routing::{
        astar::AStar,
        astar_enhanced::AStarEnhanced,
        dijkstra::Dijkstra,
        routing_request::{RouteEndpoint, RoutingAlgorithm, RoutingRequest},
        search_observer::{NoopObserver, SearchObserver},
        shortest_path_algorithm::{CalcPathResult, ShortestPathAlgorithm, ShortestPathOptions},
    },
    stopwatch::Stopwatch,
    types::NodeId,
    weighting::TravelTimeWeighting,
};

/// Read-only routing engine over a single road graph.
///
/// The weighting and its maximum speed are fixed when the router is built, so every
/// search sees the same heuristic. Searches only borrow the router and can run
/// concurrently.
pub struct Router {
    graph: RoadGraph,
    weighting: TravelTimeWeighting,
    index: LocationIndex,
}

impl Router {
    pub fn new(graph: RoadGraph) -> Router {
        let weighting = TravelTimeWeighting::new(&graph);
        let index = LocationIndex::build_from_graph(&graph);

        Router {
            graph,
            weighting,
            index,
        }
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn weighting(&self) -> &TravelTimeWeighting {
        &self.weighting
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    pub fn resolve(&self, endpoint: &RouteEndpoint) -> Result<NodeId, RoutingError> {
        match endpoint {
            RouteEndpoint::Node(node) => {
                if self.graph.contains_node(*node) {
                    Ok(*node)
                } else {
                    Err(RoutingError::InvalidNode { node: *node })
                }
            }
            RouteEndpoint::Point(point) => {
                let (node, distance) =
                    self.index
                        .closest_node(point)
                        .ok_or(RoutingError::NoClosestNode {
                            lat: point.lat,
                            lng: point.lng,
                        })?;
                debug!(node, distance_km = distance, "Snapped {:?}", point);
                Ok(node)
            }
        }
    }

    pub fn route(&self, request: &RoutingRequest) -> Result<CalcPathResult, RoutingError> {
        self.route_observed(request, &mut NoopObserver)
    }

    pub fn route_observed(
        &self,
        request: &RoutingRequest,
        observer: &mut impl SearchObserver,
    ) -> Result<CalcPathResult, RoutingError> {
        let start = self.resolve(&request.start)?;
        let end = self.resolve(&request.end)?;

        self.route_between_nodes(
            request.algorithm(),
            start,
            end,
            request.options.map(ShortestPathOptions::from),
            observer,
        )
    }

    pub fn route_between_nodes(
        &self,
        algorithm: RoutingAlgorithm,
        start: NodeId,
        end: NodeId,
        options: Option<ShortestPathOptions>,
        observer: &mut impl SearchObserver,
    ) -> Result<CalcPathResult, RoutingError> {
        let graph = &self.graph;
        let weighting = &self.weighting;

        match algorithm {
            RoutingAlgorithm::Dijkstra => Dijkstra::new()
                .calc_path_observed(graph, weighting, start, end, options, observer),
            RoutingAlgorithm::Astar => AStar::new()
                .calc_path_observed(graph, weighting, start, end, options, observer),
            RoutingAlgorithm::AstarEnhanced => AStarEnhanced::new()
                .calc_path_observed(graph, weighting, start, end, options, observer),
        }
    }

    /// Runs every request on the rayon pool, results keep the order of `requests`.
    pub fn route_many(
        &self,
        requests: &[RoutingRequest],
    ) -> Vec<Result<CalcPathResult, RoutingError>> {
        let stopwatch = Stopwatch::new("router/route_many");

        let results = requests
            .par_iter()
            .map(|request| self.route(request))
            .collect();

        stopwatch.report();

        results
    }
}
