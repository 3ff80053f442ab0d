use crate::constants::DEFAULT_MAX_SPEED_KMH;
use crate::graph::Graph;
use crate::graph_edge::GraphEdge;

/// Travel time in hours.
pub type Weight = f64;

pub trait Weighting {
    fn calc_edge_weight(&self, edge: &GraphEdge) -> Weight;

    /// Highest speed reachable anywhere in the graph, in km/h.
    fn max_speed(&self) -> f64;
}

/// Travel time at the posted speed limit: `length / 1000 / speed`.
#[derive(Debug, Clone, Copy)]
pub struct TravelTimeWeighting {
    max_speed: f64,
}

impl TravelTimeWeighting {
    /// Scans every edge once to find the global maximum speed.
    ///
    /// The value must stay fixed while any search that uses it is running.
    pub fn new(graph: &impl Graph) -> Self {
        let max_speed = (0..graph.edge_count())
            .map(|edge_id| graph.edge(edge_id).max_speed())
            .fold(None, |max: Option<f64>, speed| {
                Some(max.map_or(speed, |max| max.max(speed)))
            })
            .unwrap_or(DEFAULT_MAX_SPEED_KMH);

        TravelTimeWeighting { max_speed }
    }

    pub fn with_max_speed(max_speed: f64) -> Self {
        TravelTimeWeighting { max_speed }
    }
}

impl Weighting for TravelTimeWeighting {
    #[inline(always)]
    fn calc_edge_weight(&self, edge: &GraphEdge) -> Weight {
        edge.travel_time_hours()
    }

    fn max_speed(&self) -> f64 {
        self.max_speed
    }
}
