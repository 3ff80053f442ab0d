use std::{fs, path::Path};

use anyhow::Context;
use ariadne_routing::{
    RoadGraph,
    graph::Graph,
    routing::exploration::{EdgeState, EdgeUsage, ExplorationTracker},
    types::EdgeId,
};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value::LineString};
use serde_json::json;
use tracing::info;

fn edge_feature(graph: &RoadGraph, edge_id: EdgeId, properties: JsonObject) -> Feature {
    let edge = graph.edge(edge_id);
    let points: Vec<Vec<f64>> = [edge.start_node(), edge.end_node()]
        .iter()
        .map(|node| {
            let point = graph.node_geometry(*node);
            vec![point.lng, point.lat]
        })
        .collect();

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(LineString(points))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn collection(features: Vec<Feature>) -> GeoJson {
    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Every edge the search touched, with its final state.
pub fn exploration_geojson(graph: &RoadGraph, tracker: &ExplorationTracker) -> GeoJson {
    let features = tracker
        .states()
        .iter()
        .enumerate()
        .filter(|(_, state)| **state != EdgeState::Unvisited)
        .map(|(edge_id, state)| {
            let mut properties = JsonObject::new();
            properties.insert(String::from("edge"), json!(edge_id));
            properties.insert(String::from("state"), json!(state));
            edge_feature(graph, edge_id, properties)
        })
        .collect();

    collection(features)
}

/// Used edges with the number of routes going through them.
pub fn usage_geojson(graph: &RoadGraph, usage: &EdgeUsage) -> GeoJson {
    let routes = usage.routes().max(1) as f64;
    let features = usage
        .ranked()
        .into_iter()
        .map(|(edge_id, uses)| {
            let mut properties = JsonObject::new();
            properties.insert(String::from("edge"), json!(edge_id));
            properties.insert(String::from("uses"), json!(uses));
            properties.insert(String::from("share"), json!(uses as f64 / routes));
            edge_feature(graph, edge_id, properties)
        })
        .collect();

    collection(features)
}

pub fn write_geojson(path: &Path, geojson: &GeoJson) -> Result<(), anyhow::Error> {
    let contents = serde_json::to_string(geojson)?;
    fs::write(path, contents).with_context(|| format!("Failed to write {path:?}"))?;
    info!("Wrote {:?}", path);
    Ok(())
}
