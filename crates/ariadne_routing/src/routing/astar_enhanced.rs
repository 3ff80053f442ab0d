use crate::{
    error::RoutingError,
    graph::Graph,
    types::NodeId,
    weighting::{Weight, Weighting},
};

use super::{
    astar_heuristic::{AStarHeuristic, TravelTimeHeuristic},
    label_search,
    search_observer::SearchObserver,
    search_strategy::{SearchContext, SearchStrategy},
    shortest_path_algorithm::{CalcPathResult, ShortestPathAlgorithm, ShortestPathOptions},
};

/// A* with an adaptive pruning rule on top of the travel time heuristic.
///
/// While searching it remembers how close to the destination the search has come
/// (`best_node_distance`, in kilometers) and skips relaxations towards nodes that
/// are much farther away than that. The rule is not admissible: a route that has to
/// move away from the destination first can be cut off, so results are usually
/// close to optimal but never guaranteed to be.
#[derive(Debug, Default)]
pub struct AStarEnhanced {
    heuristic: TravelTimeHeuristic,
    source_destination_distance: f64,
    best_node_distance: Option<f64>,
    level_max_distance: Option<f64>,
    destination_distance: f64,
    pruned: usize,
}

impl AStarEnhanced {
    pub fn new() -> AStarEnhanced {
        AStarEnhanced::default()
    }

    /// Closest approach to the destination recorded so far, in kilometers.
    pub fn best_node_distance(&self) -> Option<f64> {
        self.best_node_distance
    }
}

/// `destination_distance * min(1, ln(1 + best)) > 2 * best`
#[inline(always)]
pub(crate) fn should_prune(destination_distance: f64, best_node_distance: f64) -> bool {
    let damping = best_node_distance.ln_1p().min(1.0);
    destination_distance * damping > 2.0 * best_node_distance
}

impl SearchStrategy for AStarEnhanced {
    const NAME: &'static str = "astar_enhanced";

    fn init<G: Graph, W: Weighting>(&mut self, ctx: &SearchContext<'_, G, W>) {
        self.source_destination_distance = ctx
            .graph
            .node_geometry(ctx.start)
            .haversine_km(ctx.graph.node_geometry(ctx.end));
        self.best_node_distance = None;
        self.level_max_distance = None;
        self.destination_distance = 0.0;
        self.pruned = 0;
    }

    #[inline(always)]
    fn priority<G: Graph, W: Weighting>(
        &self,
        ctx: &SearchContext<'_, G, W>,
        node: NodeId,
        distance: Weight,
    ) -> Weight {
        distance
            + self
                .heuristic
                .estimate(ctx.graph, ctx.weighting, node, ctx.end)
    }

    fn admit<G: Graph, W: Weighting>(&mut self, ctx: &SearchContext<'_, G, W>, next: NodeId) -> bool {
        self.destination_distance = ctx
            .graph
            .node_geometry(next)
            .haversine_km(ctx.graph.node_geometry(ctx.end));

        match self.best_node_distance {
            Some(best) if should_prune(self.destination_distance, best) => {
                self.pruned += 1;
                false
            }
            _ => true,
        }
    }

    fn on_relaxed(&mut self, _next: NodeId) {
        let distance = self.destination_distance;

        if self.best_node_distance.is_none() {
            self.best_node_distance = Some(self.source_destination_distance.min(distance));
        }

        self.level_max_distance = Some(match self.level_max_distance {
            Some(level_max) => level_max.max(distance),
            None => distance,
        });
    }

    fn on_settled(&mut self) {
        if let (Some(level_max), Some(best)) =
            (self.level_max_distance.take(), self.best_node_distance)
        {
            self.best_node_distance = Some(best.min(level_max));
        }
    }

    fn pruned_relaxations(&self) -> usize {
        self.pruned
    }
}

impl ShortestPathAlgorithm for AStarEnhanced {
    fn calc_path_observed(
        &mut self,
        graph: &impl Graph,
        weighting: &impl Weighting,
        start: NodeId,
        end: NodeId,
        options: Option<ShortestPathOptions>,
        observer: &mut impl SearchObserver,
    ) -> Result<CalcPathResult, RoutingError> {
        label_search::calc_path(self, graph, weighting, start, end, options, observer)
    }
}
