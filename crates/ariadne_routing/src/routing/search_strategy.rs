use crate::{graph::Graph, types::NodeId, weighting::Weight, weighting::Weighting};

/// Read-only inputs shared by the relaxation loop and its strategy.
pub struct SearchContext<'a, G, W> {
    pub graph: &'a G,
    pub weighting: &'a W,
    pub start: NodeId,
    pub end: NodeId,
}

/// The per-variant decisions of the label-correcting search.
///
/// The loop owns termination, tie-breaking and label updates; a strategy only picks
/// the queue key and may veto a relaxation before the label is compared.
pub trait SearchStrategy {
    /// Name used in logs.
    const NAME: &'static str;

    /// Resets any per-search state.
    fn init<G: Graph, W: Weighting>(&mut self, _ctx: &SearchContext<'_, G, W>) {}

    /// Queue key for `node` reached with travel time `distance`.
    fn priority<G: Graph, W: Weighting>(
        &self,
        ctx: &SearchContext<'_, G, W>,
        node: NodeId,
        distance: Weight,
    ) -> Weight;

    /// Returning `false` skips the relaxation towards `next` entirely. Only called
    /// for targets that are not settled yet.
    fn admit<G: Graph, W: Weighting>(
        &mut self,
        _ctx: &SearchContext<'_, G, W>,
        _next: NodeId,
    ) -> bool {
        true
    }

    /// The label of `next` was improved by the last admitted relaxation.
    fn on_relaxed(&mut self, _next: NodeId) {}

    /// All outgoing edges of the current node have been examined.
    fn on_settled(&mut self) {}

    fn pruned_relaxations(&self) -> usize {
        0
    }
}
