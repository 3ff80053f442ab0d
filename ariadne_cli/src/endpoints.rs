use std::path::PathBuf;

use anyhow::{Context, anyhow};
use ariadne_routing::{
    GeoPoint, RouteEndpoint, Router, graph::Graph, types::ExternalNodeId, types::NodeId,
};
use clap::Args;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{info, warn};

use crate::{graph_file::load_graph, parsers};

/// Snapping farther than this from the requested coordinate is suspicious.
const SNAP_WARNING_KM: f64 = 0.5;

#[derive(Args)]
pub struct GraphArgs {
    /// JSON road graph with `nodes` and `edges`
    #[arg(short, long)]
    pub graph: PathBuf,

    /// Seed for the random destination(s)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GraphArgs {
    pub fn load_router(&self) -> Result<Router, anyhow::Error> {
        let graph = load_graph(&self.graph)?;
        Ok(Router::new(graph))
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

#[derive(Args)]
pub struct SourceArgs {
    /// Start of the route as "lat,lng"
    #[arg(short, long, value_parser = parsers::parse_lat_lng, required_unless_present = "source_node")]
    pub source: Option<GeoPoint>,

    /// Start of the route as a node id of the graph file
    #[arg(long, conflicts_with = "source")]
    pub source_node: Option<ExternalNodeId>,
}

impl SourceArgs {
    pub fn resolve(&self, router: &Router) -> Result<NodeId, anyhow::Error> {
        resolve_endpoint(router, self.source, self.source_node)
    }
}

#[derive(Args)]
pub struct DestinationArgs {
    /// End of the route as "lat,lng", a random node when omitted
    #[arg(short = 't', long, value_parser = parsers::parse_lat_lng)]
    pub destination: Option<GeoPoint>,

    /// End of the route as a node id of the graph file
    #[arg(long, conflicts_with = "destination")]
    pub destination_node: Option<ExternalNodeId>,
}

impl DestinationArgs {
    pub fn resolve(&self, router: &Router, rng: &mut impl Rng) -> Result<NodeId, anyhow::Error> {
        if self.destination.is_none() && self.destination_node.is_none() {
            let node = random_node(router, rng);
            info!(
                "No destination given, picked node {}",
                router.graph().external_id(node)
            );
            return Ok(node);
        }

        resolve_endpoint(router, self.destination, self.destination_node)
    }
}

pub fn random_node(router: &Router, rng: &mut impl Rng) -> NodeId {
    rng.random_range(0..router.graph().node_count())
}

fn resolve_endpoint(
    router: &Router,
    point: Option<GeoPoint>,
    external_id: Option<ExternalNodeId>,
) -> Result<NodeId, anyhow::Error> {
    if let Some(external_id) = external_id {
        return router
            .graph()
            .node_id(external_id)
            .ok_or_else(|| anyhow!("Node {external_id} is not in the graph"));
    }

    let point = point.ok_or_else(|| anyhow!("Either a coordinate or a node id is required"))?;
    let node = router
        .resolve(&RouteEndpoint::Point(point))
        .with_context(|| format!("Failed to snap {},{}", point.lat, point.lng))?;

    let distance = point.haversine_km(router.graph().node_geometry(node));
    if distance > SNAP_WARNING_KM {
        warn!(
            "Closest node {} is {:.2} km away from {},{}",
            router.graph().external_id(node),
            distance,
            point.lat,
            point.lng
        );
    }

    Ok(node)
}
