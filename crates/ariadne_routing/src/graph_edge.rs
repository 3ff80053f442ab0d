use crate::{
    distance::{Distance, Kilometers, Meters},
    types::{EdgeId, NodeId},
};

/// Directed road segment.
#[derive(Debug, Clone)]
pub struct GraphEdge {
    id: EdgeId,
    start_node: NodeId,
    end_node: NodeId,
    distance: Distance<Meters>,
    max_speed: f64,
}

impl GraphEdge {
    pub fn new(
        id: EdgeId,
        start_node: NodeId,
        end_node: NodeId,
        distance: Distance<Meters>,
        max_speed: f64,
    ) -> Self {
        GraphEdge {
            id,
            start_node,
            end_node,
            distance,
            max_speed,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn distance(&self) -> Distance<Meters> {
        self.distance
    }

    /// Speed limit in km/h.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Travel time in hours at the speed limit.
    pub fn travel_time_hours(&self) -> f64 {
        self.distance.to::<Kilometers>().value() / self.max_speed
    }
}
