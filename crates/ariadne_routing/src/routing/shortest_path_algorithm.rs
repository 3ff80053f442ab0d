use std::time::Duration;

use serde::Deserialize;

use crate::{error::RoutingError, graph::Graph, types::NodeId, weighting::Weighting};

use super::{
    routing_path::RoutingPath,
    search_observer::{NoopObserver, SearchObserver},
};

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ShortestPathOptions {
    /// Stop with [`RoutingError::IterationBudgetExhausted`] after this many relaxations.
    pub max_iterations: Option<usize>,
}

#[derive(Debug)]
pub struct CalcPathResult {
    pub path: RoutingPath,
    /// Relaxation attempts until the destination was popped from the queue.
    pub iterations: usize,
    pub nodes_settled: usize,
    /// Relaxations skipped by a pruning rule.
    pub pruned_relaxations: usize,
    pub duration: Duration,
}

pub trait ShortestPathAlgorithm {
    fn calc_path_observed(
        &mut self,
        graph: &impl Graph,
        weighting: &impl Weighting,
        start: NodeId,
        end: NodeId,
        options: Option<ShortestPathOptions>,
        observer: &mut impl SearchObserver,
    ) -> Result<CalcPathResult, RoutingError>;

    fn calc_path(
        &mut self,
        graph: &impl Graph,
        weighting: &impl Weighting,
        start: NodeId,
        end: NodeId,
        options: Option<ShortestPathOptions>,
    ) -> Result<CalcPathResult, RoutingError> {
        self.calc_path_observed(graph, weighting, start, end, options, &mut NoopObserver)
    }
}
