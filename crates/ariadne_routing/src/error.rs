use thiserror::Error;

use crate::types::{EdgeId, ExternalNodeId, NodeId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("No route found from node {start} to node {end} after {iterations} iterations")]
    RouteNotFound {
        start: NodeId,
        end: NodeId,
        iterations: usize,
    },
    #[error("Search stopped after reaching its budget of {limit} iterations")]
    IterationBudgetExhausted { limit: usize, iterations: usize },
    #[error("Predecessor chain is broken at node {node}")]
    BrokenPath { node: NodeId },
    #[error("Edge {edge} has an invalid weight {weight}")]
    InvalidGraph { edge: EdgeId, weight: f64 },
    #[error("Node {node} does not exist in the graph")]
    InvalidNode { node: NodeId },
    #[error("No node close to ({lat}, {lng})")]
    NoClosestNode { lat: f64, lng: f64 },
}

impl RoutingError {
    /// Iterations spent before the search gave up, when the error comes from a search.
    pub fn iterations(&self) -> Option<usize> {
        match self {
            RoutingError::RouteNotFound { iterations, .. }
            | RoutingError::IterationBudgetExhausted { iterations, .. } => Some(*iterations),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Edge references unknown node {id}")]
    UnknownNode { id: ExternalNodeId },
    #[error("Node {id} was added twice")]
    DuplicateNode { id: ExternalNodeId },
    #[error("Edge {from} -> {to} has an invalid length {length}")]
    InvalidEdgeLength {
        from: ExternalNodeId,
        to: ExternalNodeId,
        length: f64,
    },
    #[error("Edge {from} -> {to} has an invalid speed {speed}")]
    InvalidSpeed {
        from: ExternalNodeId,
        to: ExternalNodeId,
        speed: f64,
    },
    #[error("Graph has no nodes")]
    EmptyGraph,
}
