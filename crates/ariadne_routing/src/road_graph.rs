use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, info};

use crate::distance::{Distance, Meters};
use crate::error::GraphError;
use crate::geopoint::GeoPoint;
use crate::graph::Graph;
use crate::graph_edge::GraphEdge;
use crate::properties::max_speed_parser::{MaxSpeedParser, RawMaxSpeed};
use crate::types::{EdgeId, ExternalNodeId, NodeId};

/// Immutable directed road network.
///
/// Nodes are stored densely, sorted by their external id, and every ordered
/// node pair carries at most one edge.
#[derive(Debug, Default)]
pub struct RoadGraph {
    coordinates: Vec<GeoPoint>,
    external_ids: Vec<ExternalNodeId>,
    node_index: FxHashMap<ExternalNodeId, NodeId>,
    edges: Vec<GraphEdge>,
    adjacency_list: Vec<Vec<EdgeId>>,
    edge_index: FxHashMap<(NodeId, NodeId), EdgeId>,
}

impl RoadGraph {
    pub fn builder() -> RoadGraphBuilder {
        RoadGraphBuilder::default()
    }

    pub fn node_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.adjacency_list[node]
    }

    /// Dense id of the node known as `external_id` in the source data.
    pub fn node_id(&self, external_id: ExternalNodeId) -> Option<NodeId> {
        self.node_index.get(&external_id).copied()
    }

    pub fn external_id(&self, node: NodeId) -> ExternalNodeId {
        self.external_ids[node]
    }

    /// The edge going from `from` to `to`, if any.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.edge_index.get(&(from, to)).copied()
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn coordinates(&self) -> &[GeoPoint] {
        &self.coordinates
    }
}

impl Graph for RoadGraph {
    type EdgeIterator<'a> = std::iter::Copied<std::slice::Iter<'a, EdgeId>>;

    fn node_count(&self) -> usize {
        self.coordinates.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn node_edges_iter(&self, node: NodeId) -> Self::EdgeIterator<'_> {
        self.adjacency_list[node].iter().copied()
    }

    fn edge(&self, edge: EdgeId) -> &GraphEdge {
        &self.edges[edge]
    }

    fn node_geometry(&self, node: NodeId) -> &GeoPoint {
        &self.coordinates[node]
    }
}

struct PendingEdge {
    from: ExternalNodeId,
    to: ExternalNodeId,
    distance: Distance<Meters>,
    max_speed: f64,
}

#[derive(Default)]
pub struct RoadGraphBuilder {
    nodes: Vec<(ExternalNodeId, GeoPoint)>,
    seen_nodes: FxHashSet<ExternalNodeId>,
    edges: Vec<PendingEdge>,
}

impl RoadGraphBuilder {
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        RoadGraphBuilder {
            nodes: Vec::with_capacity(nodes),
            seen_nodes: FxHashSet::default(),
            edges: Vec::with_capacity(edges),
        }
    }

    pub fn add_node(
        &mut self,
        id: ExternalNodeId,
        coordinates: GeoPoint,
    ) -> Result<&mut Self, GraphError> {
        if !self.seen_nodes.insert(id) {
            return Err(GraphError::DuplicateNode { id });
        }

        self.nodes.push((id, coordinates));
        Ok(self)
    }

    /// Adds a directed edge with a length in meters and an already normalized speed in km/h.
    pub fn add_edge(
        &mut self,
        from: ExternalNodeId,
        to: ExternalNodeId,
        length: f64,
        max_speed: f64,
    ) -> Result<&mut Self, GraphError> {
        if !(length.is_finite() && length > 0.0) {
            return Err(GraphError::InvalidEdgeLength { from, to, length });
        }

        if !(max_speed.is_finite() && max_speed > 0.0) {
            return Err(GraphError::InvalidSpeed {
                from,
                to,
                speed: max_speed,
            });
        }

        let distance = Distance::<Meters>::from(length);
        if !distance.is_positive() {
            return Err(GraphError::InvalidEdgeLength { from, to, length });
        }

        self.edges.push(PendingEdge {
            from,
            to,
            distance,
            max_speed,
        });
        Ok(self)
    }

    /// Adds a directed edge whose speed comes straight from the map source.
    pub fn add_raw_edge(
        &mut self,
        from: ExternalNodeId,
        to: ExternalNodeId,
        length: f64,
        max_speed: &RawMaxSpeed,
    ) -> Result<&mut Self, GraphError> {
        self.add_edge(from, to, length, MaxSpeedParser::parse_max_speed(max_speed))
    }

    pub fn build(self) -> Result<RoadGraph, GraphError> {
        let RoadGraphBuilder {
            mut nodes, edges, ..
        } = self;

        if nodes.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        nodes.sort_by_key(|(id, _)| *id);

        let node_index: FxHashMap<ExternalNodeId, NodeId> = nodes
            .iter()
            .enumerate()
            .map(|(node_id, (external_id, _))| (*external_id, node_id))
            .collect();

        let mut graph = RoadGraph {
            external_ids: nodes.iter().map(|(id, _)| *id).collect(),
            coordinates: nodes.into_iter().map(|(_, point)| point).collect(),
            node_index,
            edges: Vec::with_capacity(edges.len()),
            adjacency_list: Vec::new(),
            edge_index: FxHashMap::default(),
        };
        graph.adjacency_list = vec![vec![]; graph.coordinates.len()];

        let mut dropped = 0;
        for edge in edges {
            let start_node = graph
                .node_id(edge.from)
                .ok_or(GraphError::UnknownNode { id: edge.from })?;
            let end_node = graph
                .node_id(edge.to)
                .ok_or(GraphError::UnknownNode { id: edge.to })?;

            if graph.edge_index.contains_key(&(start_node, end_node)) {
                debug!(
                    "Dropping parallel edge {} -> {}, keeping the first one",
                    edge.from, edge.to
                );
                dropped += 1;
                continue;
            }

            let edge_id = graph.edges.len();
            graph.edges.push(GraphEdge::new(
                edge_id,
                start_node,
                end_node,
                edge.distance,
                edge.max_speed,
            ));
            graph.adjacency_list[start_node].push(edge_id);
            graph.edge_index.insert((start_node, end_node), edge_id);
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dropped_parallel_edges = dropped,
            "Built road graph"
        );

        Ok(graph)
    }
}
