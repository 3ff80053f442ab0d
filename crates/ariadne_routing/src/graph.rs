use crate::{
    geopoint::GeoPoint,
    graph_edge::GraphEdge,
    types::{EdgeId, NodeId},
};

/// Read-only directed graph consumed by the shortest path algorithms.
///
/// Implementations must be immutable for the duration of a search; the search
/// keeps its own labels and never writes back into the graph.
pub trait Graph {
    type EdgeIterator<'a>: Iterator<Item = EdgeId>
    where
        Self: 'a;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Outgoing edges of `node`, in no particular order.
    fn node_edges_iter(&self, node: NodeId) -> Self::EdgeIterator<'_>;

    fn edge(&self, edge: EdgeId) -> &GraphEdge;

    fn node_geometry(&self, node: NodeId) -> &GeoPoint;

    fn contains_node(&self, node: NodeId) -> bool {
        node < self.node_count()
    }
}
