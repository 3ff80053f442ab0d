use crate::{error::RoutingError, graph::Graph, types::NodeId};

use super::{
    routing_path::{RouteSummary, RoutingPath, RoutingPathLeg},
    search_state::SearchState,
};

/// Walks the predecessor chain from `end` back to `start`.
///
/// A missing predecessor or a chain longer than the node count (a cycle) means the
/// labels are inconsistent and is reported as [`RoutingError::BrokenPath`].
pub fn build_routing_path(
    graph: &impl Graph,
    state: &SearchState,
    start: NodeId,
    end: NodeId,
) -> Result<RoutingPath, RoutingError> {
    let mut legs: Vec<RoutingPathLeg> = Vec::with_capacity(32);
    let mut node = end;

    while node != start {
        if legs.len() >= graph.node_count() {
            return Err(RoutingError::BrokenPath { node });
        }

        let label = state.label(node);
        let (Some(previous), Some(edge_id)) = (label.previous, label.edge) else {
            return Err(RoutingError::BrokenPath { node });
        };

        let edge = graph.edge(edge_id);
        legs.push(RoutingPathLeg::new(
            edge_id,
            previous,
            node,
            edge.distance(),
            edge.travel_time_hours(),
        ));

        node = previous;
    }

    legs.reverse();

    Ok(RoutingPath::new(start, legs))
}

/// Total distance and travel time of the route recorded in `state`.
pub fn reconstruct(
    graph: &impl Graph,
    state: &SearchState,
    start: NodeId,
    end: NodeId,
) -> Result<RouteSummary, RoutingError> {
    build_routing_path(graph, state, start, end).map(|path| path.summary())
}
