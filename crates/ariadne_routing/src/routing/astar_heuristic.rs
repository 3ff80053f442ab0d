use crate::{graph::Graph, types::NodeId, weighting::Weight, weighting::Weighting};

pub trait AStarHeuristic {
    /// Name of the search this heuristic produces, used in logs.
    const NAME: &'static str;

    fn estimate(
        &self,
        graph: &impl Graph,
        weighting: &impl Weighting,
        node: NodeId,
        end: NodeId,
    ) -> Weight;
}

/// Turns A* into plain Dijkstra.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroHeuristic;

impl AStarHeuristic for ZeroHeuristic {
    const NAME: &'static str = "dijkstra";

    #[inline(always)]
    fn estimate(&self, _: &impl Graph, _: &impl Weighting, _: NodeId, _: NodeId) -> Weight {
        0.0
    }
}

/// Straight-line distance to the destination driven at the fastest speed of the graph.
///
/// No road can beat this, so the estimate is admissible and consistent as long as
/// every edge is at least as long as the straight line between its endpoints.
#[derive(Debug, Default, Clone, Copy)]
pub struct TravelTimeHeuristic;

impl AStarHeuristic for TravelTimeHeuristic {
    const NAME: &'static str = "astar";

    #[inline(always)]
    fn estimate(
        &self,
        graph: &impl Graph,
        weighting: &impl Weighting,
        node: NodeId,
        end: NodeId,
    ) -> Weight {
        let distance = graph
            .node_geometry(node)
            .haversine_km(graph.node_geometry(end));

        distance / weighting.max_speed()
    }
}
