use serde::Serialize;

use crate::{
    distance::{Distance, Kilometers, Meters},
    types::{EdgeId, NodeId},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RoutingPathLeg {
    edge_id: EdgeId,
    from: NodeId,
    to: NodeId,
    distance: Distance<Meters>,
    /// Hours.
    time: f64,
}

impl RoutingPathLeg {
    pub fn new(
        edge_id: EdgeId,
        from: NodeId,
        to: NodeId,
        distance: Distance<Meters>,
        time: f64,
    ) -> RoutingPathLeg {
        RoutingPathLeg {
            edge_id,
            from,
            to,
            distance,
            time,
        }
    }

    pub fn edge_id(&self) -> EdgeId {
        self.edge_id
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn distance(&self) -> Distance<Meters> {
        self.distance
    }

    pub fn time_hours(&self) -> f64 {
        self.time
    }
}

/// Route from source to destination as an ordered list of legs.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingPath {
    start: NodeId,
    legs: Vec<RoutingPathLeg>,
}

impl RoutingPath {
    pub fn new(start: NodeId, legs: Vec<RoutingPathLeg>) -> RoutingPath {
        RoutingPath { start, legs }
    }

    pub fn legs(&self) -> &[RoutingPathLeg] {
        &self.legs
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.legs.iter().map(|leg| leg.edge_id)
    }

    /// Visited nodes, source and destination included.
    pub fn nodes(&self) -> Vec<NodeId> {
        std::iter::once(self.start)
            .chain(self.legs.iter().map(|leg| leg.to))
            .collect()
    }

    pub fn distance(&self) -> Distance<Kilometers> {
        self.legs
            .iter()
            .map(|leg| leg.distance.to::<Kilometers>())
            .sum()
    }

    pub fn time_hours(&self) -> f64 {
        self.legs.iter().fold(0.0, |time, leg| time + leg.time)
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            distance_km: self.distance().value(),
            time_hours: self.time_hours(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub time_hours: f64,
}

impl RouteSummary {
    pub fn average_speed_kmh(&self) -> Option<f64> {
        (self.time_hours > 0.0).then(|| self.distance_km / self.time_hours)
    }

    /// Travel time as `"<minutes> m <seconds> sec"`.
    pub fn format_time(&self) -> String {
        let seconds = (self.time_hours * 3600.0).round() as u64;
        format!("{} m {} sec", seconds / 60, seconds % 60)
    }
}
