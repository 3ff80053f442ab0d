use crate::{
    graph::Graph,
    types::{EdgeId, NodeId},
    weighting::Weight,
};

/// Transient per-node label owned by a single search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchLabel {
    /// The node has been settled and its distance is final.
    pub visited: bool,
    /// Best known travel time from the source.
    pub distance: Weight,
    pub previous: Option<NodeId>,
    /// Edge from `previous` to this node.
    pub edge: Option<EdgeId>,
}

impl Default for SearchLabel {
    fn default() -> Self {
        SearchLabel {
            visited: false,
            distance: Weight::INFINITY,
            previous: None,
            edge: None,
        }
    }
}

/// Arena of labels indexed by [`NodeId`], created fresh for every search.
#[derive(Debug, Clone)]
pub struct SearchState {
    labels: Vec<SearchLabel>,
    source: NodeId,
}

impl SearchState {
    /// Every label starts unvisited at infinity, except the source at zero.
    ///
    /// `source` is trusted to exist in `graph`.
    pub fn initialize(graph: &impl Graph, source: NodeId) -> Self {
        let mut labels = vec![SearchLabel::default(); graph.node_count()];
        labels[source].distance = 0.0;

        SearchState { labels, source }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn label(&self, node: NodeId) -> &SearchLabel {
        &self.labels[node]
    }

    #[inline(always)]
    pub fn distance(&self, node: NodeId) -> Weight {
        self.labels[node].distance
    }

    #[inline(always)]
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.labels[node].visited
    }

    pub(crate) fn set_visited(&mut self, node: NodeId) {
        self.labels[node].visited = true
    }

    pub(crate) fn update(&mut self, node: NodeId, distance: Weight, previous: NodeId, edge: EdgeId) {
        let label = &mut self.labels[node];
        label.distance = distance;
        label.previous = Some(previous);
        label.edge = Some(edge);
    }

    pub fn visited_count(&self) -> usize {
        self.labels.iter().filter(|label| label.visited).count()
    }

    pub fn labels(&self) -> &[SearchLabel] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use crate::test_graph_utils::test_graph::{DiamondNode, diamond_graph, node};

    use super::*;

    #[test]
    fn initialize_sets_source_to_zero() {
        let graph = diamond_graph();
        let source = node(&graph, DiamondNode::A);
        let state = SearchState::initialize(&graph, source);

        assert_eq!(state.labels().len(), 4);
        assert_eq!(state.distance(source), 0.0);
        assert_eq!(state.label(source).previous, None);

        for other in [DiamondNode::B, DiamondNode::C, DiamondNode::D] {
            let label = state.label(node(&graph, other));
            assert_eq!(*label, SearchLabel::default());
            assert!(label.distance.is_infinite());
        }
    }

    #[test]
    fn update_records_predecessor() {
        let graph = diamond_graph();
        let mut state = SearchState::initialize(&graph, 0);
        state.update(2, 0.02, 0, 1);

        let label = state.label(2);
        assert_eq!(label.distance, 0.02);
        assert_eq!(label.previous, Some(0));
        assert_eq!(label.edge, Some(1));
        assert!(!label.visited);
    }
}
