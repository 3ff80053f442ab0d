use rstar::primitives::GeomWithData;
use rstar::{RStarInsertionStrategy, RTree, RTreeParams};
use tracing::info;

use crate::geopoint::GeoPoint;
use crate::graph::Graph;
use crate::types::NodeId;

type LocationIndexObject = GeomWithData<[f64; 2], NodeId>;

struct LocationIndexTreeParams;

impl RTreeParams for LocationIndexTreeParams {
    type DefaultInsertionStrategy = RStarInsertionStrategy;

    const MAX_SIZE: usize = 64;
    const MIN_SIZE: usize = 28;
    const REINSERTION_COUNT: usize = 5;
}

/// Planar candidates re-ranked with the haversine distance. Degrees of longitude
/// shrink away from the equator so the planar nearest is not always the closest.
const HAVERSINE_CANDIDATES: usize = 8;

/// Spatial index over node coordinates, keyed by `[lng, lat]`.
pub struct LocationIndex {
    tree: RTree<LocationIndexObject, LocationIndexTreeParams>,
}

impl LocationIndex {
    pub fn build_from_graph(graph: &impl Graph) -> LocationIndex {
        let tree: RTree<LocationIndexObject, LocationIndexTreeParams> =
            RTree::bulk_load_with_params(
                (0..graph.node_count())
                    .map(|node| {
                        LocationIndexObject::new(graph.node_geometry(node).into(), node)
                    })
                    .collect(),
            );

        info!(nodes = tree.size(), "Built location index");

        LocationIndex { tree }
    }

    /// Closest node to `coordinates` and its distance in kilometers.
    pub fn closest_node(&self, coordinates: &GeoPoint) -> Option<(NodeId, f64)> {
        let query: [f64; 2] = coordinates.into();

        self.tree
            .nearest_neighbor_iter(&query)
            .take(HAVERSINE_CANDIDATES)
            .map(|candidate| {
                let [lng, lat] = *candidate.geom();
                let distance = coordinates.haversine_km(&GeoPoint::new(lat, lng));
                (candidate.data, distance)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
