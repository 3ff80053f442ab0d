use fxhash::FxHashMap;
use serde::Serialize;

use crate::{
    graph::Graph,
    types::{EdgeId, NodeId},
};

use super::{routing_path::RoutingPath, search_observer::SearchObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeState {
    Unvisited,
    Visited,
    Active,
    Path,
}

#[derive(Debug, Clone)]
pub struct ExplorationSnapshot {
    pub iteration: usize,
    pub states: Vec<EdgeState>,
}

/// Per-edge classification of a running search, for renderers.
///
/// Later events overwrite earlier ones: an edge becomes `Visited` when examined,
/// `Active` when its tail node was improved and `Path` once the route is known.
#[derive(Debug, Clone)]
pub struct ExplorationTracker {
    states: Vec<EdgeState>,
    settled_nodes: Vec<NodeId>,
    iterations: usize,
    snapshot_interval: Option<usize>,
    snapshots: Vec<ExplorationSnapshot>,
}

impl ExplorationTracker {
    pub fn new(graph: &impl Graph) -> Self {
        ExplorationTracker {
            states: vec![EdgeState::Unvisited; graph.edge_count()],
            settled_nodes: Vec::new(),
            iterations: 0,
            snapshot_interval: None,
            snapshots: Vec::new(),
        }
    }

    /// Records a copy of all edge states every `interval` iterations.
    pub fn with_snapshots(mut self, interval: usize) -> Self {
        self.snapshot_interval = Some(interval.max(1));
        self
    }

    pub fn state(&self, edge: EdgeId) -> EdgeState {
        self.states[edge]
    }

    pub fn states(&self) -> &[EdgeState] {
        &self.states
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn settled_nodes(&self) -> &[NodeId] {
        &self.settled_nodes
    }

    pub fn snapshots(&self) -> &[ExplorationSnapshot] {
        &self.snapshots
    }

    pub fn count(&self, state: EdgeState) -> usize {
        self.states.iter().filter(|s| **s == state).count()
    }

    pub fn snapshot(&self) -> ExplorationSnapshot {
        ExplorationSnapshot {
            iteration: self.iterations,
            states: self.states.clone(),
        }
    }

    pub fn mark_path(&mut self, path: &RoutingPath) {
        for edge in path.edges() {
            self.states[edge] = EdgeState::Path;
        }
    }
}

impl SearchObserver for ExplorationTracker {
    fn on_node_settled(&mut self, node: NodeId) {
        self.settled_nodes.push(node);
    }

    fn on_edge_visited(&mut self, edge: EdgeId) {
        self.states[edge] = EdgeState::Visited;
    }

    fn on_edge_active(&mut self, edge: EdgeId) {
        self.states[edge] = EdgeState::Active;
    }

    fn on_iteration(&mut self, iteration: usize) {
        self.iterations = iteration;

        if let Some(interval) = self.snapshot_interval {
            if iteration % interval == 0 {
                let snapshot = self.snapshot();
                self.snapshots.push(snapshot);
            }
        }
    }
}

/// How many computed routes used each edge, across many searches.
#[derive(Debug, Default, Clone)]
pub struct EdgeUsage {
    uses: FxHashMap<EdgeId, u32>,
    routes: usize,
}

impl EdgeUsage {
    pub fn record(&mut self, path: &RoutingPath) {
        self.routes += 1;
        for edge in path.edges() {
            *self.uses.entry(edge).or_insert(0) += 1;
        }
    }

    pub fn merge(&mut self, other: EdgeUsage) {
        self.routes += other.routes;
        for (edge, uses) in other.uses {
            *self.uses.entry(edge).or_insert(0) += uses;
        }
    }

    pub fn uses(&self, edge: EdgeId) -> u32 {
        self.uses.get(&edge).copied().unwrap_or(0)
    }

    pub fn routes(&self) -> usize {
        self.routes
    }

    /// Used edges, most used first, ties by ascending edge id.
    pub fn ranked(&self) -> Vec<(EdgeId, u32)> {
        let mut ranked: Vec<(EdgeId, u32)> =
            self.uses.iter().map(|(edge, uses)| (*edge, *uses)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        routing::{astar::AStar, shortest_path_algorithm::ShortestPathAlgorithm},
        test_graph_utils::test_graph::{DiamondNode, diamond_graph, node},
        weighting::TravelTimeWeighting,
    };

    use super::*;

    #[test]
    fn tracks_edge_states_on_diamond() {
        let graph = diamond_graph();
        let weighting = TravelTimeWeighting::new(&graph);
        let mut tracker = ExplorationTracker::new(&graph);

        let result = AStar::new()
            .calc_path_observed(
                &graph,
                &weighting,
                node(&graph, DiamondNode::A),
                node(&graph, DiamondNode::D),
                None,
                &mut tracker,
            )
            .unwrap();

        assert_eq!(tracker.iterations(), result.iterations);
        assert_eq!(tracker.count(EdgeState::Unvisited), 0);
        assert_eq!(tracker.state(graph.edge_between(1, 3).unwrap()), EdgeState::Active);

        tracker.mark_path(&result.path);
        assert_eq!(tracker.count(EdgeState::Path), 2);
        for edge in result.path.edges() {
            assert_eq!(tracker.state(edge), EdgeState::Path);
        }
    }

    #[test]
    fn takes_snapshots_at_interval() {
        let graph = diamond_graph();
        let weighting = TravelTimeWeighting::new(&graph);
        let mut tracker = ExplorationTracker::new(&graph).with_snapshots(1);

        let result = AStar::new()
            .calc_path_observed(
                &graph,
                &weighting,
                node(&graph, DiamondNode::A),
                node(&graph, DiamondNode::D),
                None,
                &mut tracker,
            )
            .unwrap();

        assert_eq!(tracker.snapshots().len(), result.iterations);
        let first = &tracker.snapshots()[0];
        assert_eq!(first.iteration, 1);
        assert_eq!(
            first.states.iter().filter(|s| **s != EdgeState::Unvisited).count(),
            1
        );
    }

    #[test]
    fn edge_usage_counts_routes() {
        let graph = diamond_graph();
        let weighting = TravelTimeWeighting::new(&graph);
        let mut usage = EdgeUsage::default();

        for _ in 0..3 {
            let result = AStar::new()
                .calc_path(
                    &graph,
                    &weighting,
                    node(&graph, DiamondNode::A),
                    node(&graph, DiamondNode::D),
                    None,
                )
                .unwrap();
            usage.record(&result.path);
        }

        assert_eq!(usage.routes(), 3);
        let a_to_c = graph.edge_between(0, 2).unwrap();
        let c_to_d = graph.edge_between(2, 3).unwrap();
        assert_eq!(usage.uses(a_to_c), 3);
        assert_eq!(usage.uses(c_to_d), 3);
        assert_eq!(usage.uses(graph.edge_between(0, 1).unwrap()), 0);
        assert_eq!(usage.ranked(), vec![(a_to_c, 3), (c_to_d, 3)]);
    }
}
