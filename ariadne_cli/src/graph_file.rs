use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use ariadne_routing::{
    GeoPoint, RoadGraph, RoadGraphBuilder, properties::max_speed_parser::RawMaxSpeed,
    types::ExternalNodeId,
};
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
pub struct GraphFileNode {
    pub id: ExternalNodeId,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
pub struct GraphFileEdge {
    pub from: ExternalNodeId,
    pub to: ExternalNodeId,
    /// Meters
    pub length: f64,
    #[serde(default)]
    pub maxspeed: RawMaxSpeed,
}

/// Road network exported by the map acquisition step.
#[derive(Deserialize)]
pub struct GraphFile {
    pub nodes: Vec<GraphFileNode>,
    pub edges: Vec<GraphFileEdge>,
}

impl GraphFile {
    pub fn into_graph(self) -> Result<RoadGraph, anyhow::Error> {
        let mut builder = RoadGraphBuilder::with_capacity(self.nodes.len(), self.edges.len());

        for node in self.nodes {
            builder.add_node(node.id, GeoPoint::new(node.lat, node.lng))?;
        }

        for edge in self.edges {
            builder.add_raw_edge(edge.from, edge.to, edge.length, &edge.maxspeed)?;
        }

        Ok(builder.build()?)
    }
}

pub fn load_graph(path: &Path) -> Result<RoadGraph, anyhow::Error> {
    info!("Loading graph {:?}", path);

    let file = File::open(path).with_context(|| format!("Failed to open {path:?}"))?;
    let graph_file: GraphFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {path:?}"))?;

    graph_file
        .into_graph()
        .with_context(|| format!("Invalid graph in {path:?}"))
}
