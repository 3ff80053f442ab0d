use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::{
    error::RoutingError,
    graph::Graph,
    stopwatch::Stopwatch,
    types::NodeId,
    weighting::{Weight, Weighting},
};

use super::{
    routing_path_builder::build_routing_path,
    search_observer::SearchObserver,
    search_state::SearchState,
    search_strategy::{SearchContext, SearchStrategy},
    shortest_path_algorithm::{CalcPathResult, ShortestPathOptions},
};

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    priority: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped on both keys: smallest priority first, then smallest node id
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SearchStatistics {
    pub iterations: usize,
    pub nodes_settled: usize,
}

/// Label-correcting search shared by every algorithm variant.
///
/// Returns once `end` is popped from the queue. Labels stay in `state` for the
/// path reconstruction.
pub(crate) fn run<S, G, W, O>(
    strategy: &mut S,
    ctx: &SearchContext<'_, G, W>,
    state: &mut SearchState,
    options: ShortestPathOptions,
    observer: &mut O,
) -> Result<SearchStatistics, RoutingError>
where
    S: SearchStrategy,
    G: Graph,
    W: Weighting,
    O: SearchObserver,
{
    let graph = ctx.graph;
    let mut stats = SearchStatistics::default();
    let mut heap: BinaryHeap<HeapItem> = BinaryHeap::with_capacity(1024);

    strategy.init(ctx);
    heap.push(HeapItem {
        node_id: ctx.start,
        priority: strategy.priority(ctx, ctx.start, 0.0),
    });

    while let Some(HeapItem { node_id, .. }) = heap.pop() {
        if node_id == ctx.end {
            return Ok(stats);
        }

        // Stale entry, the node was already settled with a better key
        if state.is_visited(node_id) {
            continue;
        }

        state.set_visited(node_id);
        stats.nodes_settled += 1;
        observer.on_node_settled(node_id);

        for edge_id in graph.node_edges_iter(node_id) {
            if let Some(limit) = options.max_iterations {
                if stats.iterations >= limit {
                    return Err(RoutingError::IterationBudgetExhausted {
                        limit,
                        iterations: stats.iterations,
                    });
                }
            }

            stats.iterations += 1;
            observer.on_edge_visited(edge_id);
            observer.on_iteration(stats.iterations);

            let edge = graph.edge(edge_id);
            let edge_weight = ctx.weighting.calc_edge_weight(edge);
            if !(edge_weight.is_finite() && edge_weight > 0.0) {
                return Err(RoutingError::InvalidGraph {
                    edge: edge_id,
                    weight: edge_weight,
                });
            }

            let adj_node = edge.end_node();
            if state.is_visited(adj_node) {
                continue;
            }

            if !strategy.admit(ctx, adj_node) {
                continue;
            }

            let next_weight = state.distance(node_id) + edge_weight;

            if next_weight < state.distance(adj_node) {
                state.update(adj_node, next_weight, node_id, edge_id);
                strategy.on_relaxed(adj_node);

                heap.push(HeapItem {
                    node_id: adj_node,
                    priority: strategy.priority(ctx, adj_node, next_weight),
                });

                for active_edge in graph.node_edges_iter(adj_node) {
                    observer.on_edge_active(active_edge);
                }
            }
        }

        strategy.on_settled();
    }

    Err(RoutingError::RouteNotFound {
        start: ctx.start,
        end: ctx.end,
        iterations: stats.iterations,
    })
}

/// Runs `strategy` from `start` to `end` and rebuilds the winning path.
pub(crate) fn calc_path<S, G, W, O>(
    strategy: &mut S,
    graph: &G,
    weighting: &W,
    start: NodeId,
    end: NodeId,
    options: Option<ShortestPathOptions>,
    observer: &mut O,
) -> Result<CalcPathResult, RoutingError>
where
    S: SearchStrategy,
    G: Graph,
    W: Weighting,
    O: SearchObserver,
{
    let stopwatch = Stopwatch::new(S::NAME);

    for node in [start, end] {
        if !graph.contains_node(node) {
            return Err(RoutingError::InvalidNode { node });
        }
    }

    let ctx = SearchContext {
        graph,
        weighting,
        start,
        end,
    };
    let mut state = SearchState::initialize(graph, start);

    let stats = match run(
        strategy,
        &ctx,
        &mut state,
        options.unwrap_or_default(),
        observer,
    ) {
        Ok(stats) => stats,
        Err(error) => {
            debug!(
                algorithm = S::NAME,
                nodes_settled = state.visited_count(),
                pruned = strategy.pruned_relaxations(),
                "{}",
                error
            );
            return Err(error);
        }
    };

    let path = build_routing_path(graph, &state, start, end)?;

    debug!(
        algorithm = S::NAME,
        iterations = stats.iterations,
        nodes_settled = stats.nodes_settled,
        pruned = strategy.pruned_relaxations(),
        "{} iterations: {}",
        S::NAME,
        stats.iterations
    );
    stopwatch.report();

    Ok(CalcPathResult {
        path,
        iterations: stats.iterations,
        nodes_settled: stats.nodes_settled,
        pruned_relaxations: strategy.pruned_relaxations(),
        duration: stopwatch.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pops_smallest_priority_first() {
        let mut heap = BinaryHeap::new();
        heap.push(HeapItem {
            node_id: 1,
            priority: 0.5,
        });
        heap.push(HeapItem {
            node_id: 2,
            priority: 0.1,
        });
        heap.push(HeapItem {
            node_id: 3,
            priority: 0.3,
        });

        let order: Vec<NodeId> = std::iter::from_fn(|| heap.pop().map(|i| i.node_id)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn heap_breaks_ties_by_ascending_node_id() {
        let mut heap = BinaryHeap::new();
        for node_id in [7, 3, 9, 1] {
            heap.push(HeapItem {
                node_id,
                priority: 0.25,
            });
        }

        let order: Vec<NodeId> = std::iter::from_fn(|| heap.pop().map(|i| i.node_id)).collect();
        assert_eq!(order, vec![1, 3, 7, 9]);
    }
}
