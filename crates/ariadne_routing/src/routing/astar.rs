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

/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The queue is ordered by `distance + heuristic`; labels only ever hold the real
/// travel time from the source.
pub struct AStar<H: AStarHeuristic> {
    heuristic: H,
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        AStar { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl AStar<TravelTimeHeuristic> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> AStar<TravelTimeHeuristic> {
        Self::with_heuristic(TravelTimeHeuristic)
    }
}

impl<H: AStarHeuristic> SearchStrategy for AStar<H> {
    const NAME: &'static str = H::NAME;

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
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for AStar<H> {
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

#[cfg(test)]
mod tests {
    use crate::{
        routing::{dijkstra::Dijkstra, exploration::ExplorationTracker},
        test_graph_utils::test_graph::{
            DiamondNode, diamond_graph, disconnected_graph, grid_graph, node, path_length_km,
        },
        weighting::TravelTimeWeighting,
    };

    use super::*;

    #[test]
    fn test_calc_path_diamond() {
        let graph = diamond_graph();
        let weighting = TravelTimeWeighting::new(&graph);

        let result = AStar::new()
            .calc_path(
                &graph,
                &weighting,
                node(&graph, DiamondNode::A),
                node(&graph, DiamondNode::D),
                None,
            )
            .unwrap();

        let summary = result.path.summary();
        assert_eq!(
            result.path.nodes(),
            vec![
                node(&graph, DiamondNode::A),
                node(&graph, DiamondNode::C),
                node(&graph, DiamondNode::D)
            ]
        );
        assert_eq!(summary.distance_km, 2.5);
        assert!((summary.time_hours - 0.025).abs() < 1e-12);
        assert_eq!(result.iterations, 3);
        assert_eq!(result.nodes_settled, 2);
    }

    #[test]
    fn matches_dijkstra_on_grid() {
        let graph = grid_graph(8, 9);
        let weighting = TravelTimeWeighting::new(&graph);

        for (start, end) in [(0, 71), (71, 0), (8, 63), (30, 5), (40, 41)] {
            let dijkstra = Dijkstra::new()
                .calc_path(&graph, &weighting, start, end, None)
                .unwrap();
            let astar = AStar::new()
                .calc_path(&graph, &weighting, start, end, None)
                .unwrap();

            assert!((astar.path.time_hours() - dijkstra.path.time_hours()).abs() < 1e-12);
            assert!(astar.nodes_settled <= dijkstra.nodes_settled);
        }
    }

    #[test]
    fn distance_matches_edge_lengths() {
        let graph = grid_graph(5, 5);
        let weighting = TravelTimeWeighting::new(&graph);

        let result = AStar::new()
            .calc_path(&graph, &weighting, 0, 24, None)
            .unwrap();

        let expected = path_length_km(&graph, &result.path.nodes());
        assert!((result.path.summary().distance_km - expected).abs() < 1e-9);
    }

    #[test]
    fn unreachable_destination() {
        let graph = disconnected_graph();
        let weighting = TravelTimeWeighting::new(&graph);
        let mut tracker = ExplorationTracker::new(&graph);

        let start = node(&graph, 1);
        let end = node(&graph, 12);
        let error = AStar::new()
            .calc_path_observed(&graph, &weighting, start, end, None, &mut tracker)
            .unwrap_err();

        assert!(matches!(error, RoutingError::RouteNotFound { .. }));
        assert_eq!(error.iterations(), Some(4));

        let mut settled = tracker.settled_nodes().to_vec();
        settled.sort();
        assert_eq!(
            settled,
            vec![node(&graph, 1), node(&graph, 2), node(&graph, 3), node(&graph, 4)]
        );
    }

    #[test]
    fn start_is_destination() {
        let graph = diamond_graph();
        let weighting = TravelTimeWeighting::new(&graph);

        let result = AStar::new().calc_path(&graph, &weighting, 2, 2, None).unwrap();

        assert!(result.path.legs().is_empty());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn invalid_node() {
        let graph = diamond_graph();
        let weighting = TravelTimeWeighting::new(&graph);

        let error = AStar::new()
            .calc_path(&graph, &weighting, 0, 99, None)
            .unwrap_err();
        assert_eq!(error, RoutingError::InvalidNode { node: 99 });
    }

    #[test]
    fn iteration_budget() {
        let graph = grid_graph(6, 6);
        let weighting = TravelTimeWeighting::new(&graph);
        let options = ShortestPathOptions {
            max_iterations: Some(5),
        };

        let error = AStar::new()
            .calc_path(&graph, &weighting, 0, 35, Some(options))
            .unwrap_err();

        assert_eq!(
            error,
            RoutingError::IterationBudgetExhausted {
                limit: 5,
                iterations: 5
            }
        );
    }
}
