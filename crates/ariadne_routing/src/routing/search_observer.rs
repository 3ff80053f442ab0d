use crate::types::{EdgeId, NodeId};

/// Hooks called by the relaxation loop, used to feed renderers and statistics.
///
/// Every method has an empty default so observers only implement what they need.
pub trait SearchObserver {
    /// A node was settled. Called at most once per node and search.
    fn on_node_settled(&mut self, _node: NodeId) {}

    /// An edge was examined, whether or not the relaxation improved anything.
    fn on_edge_visited(&mut self, _edge: EdgeId) {}

    /// An outgoing edge of a node whose label was just improved.
    fn on_edge_active(&mut self, _edge: EdgeId) {}

    /// Called once per relaxation attempt, right after `on_edge_visited`, with the running counter.
    fn on_iteration(&mut self, _iteration: usize) {}
}

pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_node_settled(&mut self, node: NodeId) {
        (**self).on_node_settled(node)
    }

    fn on_edge_visited(&mut self, edge: EdgeId) {
        (**self).on_edge_visited(edge)
    }

    fn on_edge_active(&mut self, edge: EdgeId) {
        (**self).on_edge_active(edge)
    }

    fn on_iteration(&mut self, iteration: usize) {
        (**self).on_iteration(iteration)
    }
}
