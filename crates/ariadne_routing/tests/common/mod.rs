#![allow(dead_code)]

use ariadne_routing::{GeoPoint, RoadGraph, graph::Graph, types::NodeId};
use rand::{Rng, SeedableRng, rngs::StdRng};

pub const SPEEDS: [f64; 5] = [30.0, 50.0, 70.0, 90.0, 110.0];

/// Two-way grid with random detours and speed limits, reproducible from `seed`.
///
/// Every road is at least as long as the straight line between its ends.
pub fn random_grid(seed: u64, rows: usize, cols: usize, spacing: f64) -> RoadGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = RoadGraph::builder();
    let point = |row: usize, col: usize| {
        GeoPoint::new(48.85 + row as f64 * spacing, 2.35 + col as f64 * spacing)
    };
    let id = |row: usize, col: usize| (row * cols + col) as i64;

    for row in 0..rows {
        for col in 0..cols {
            builder.add_node(id(row, col), point(row, col)).unwrap();
        }
    }

    for row in 0..rows {
        for col in 0..cols {
            let mut neighbors = vec![];
            if col + 1 < cols {
                neighbors.push((row, col + 1));
            }
            if row + 1 < rows {
                neighbors.push((row + 1, col));
            }

            for (next_row, next_col) in neighbors {
                let straight = point(row, col).haversine_km(&point(next_row, next_col)) * 1000.0;
                let length = straight * rng.random_range(1.0..1.4);
                let forward = SPEEDS[rng.random_range(0..SPEEDS.len())];
                let backward = SPEEDS[rng.random_range(0..SPEEDS.len())];

                builder
                    .add_edge(id(row, col), id(next_row, next_col), length, forward)
                    .unwrap()
                    .add_edge(id(next_row, next_col), id(row, col), length, backward)
                    .unwrap();
            }
        }
    }

    builder.build().unwrap()
}

/// Scattered nodes with random one-way roads, some destinations are unreachable.
pub fn random_sparse_graph(seed: u64, nodes: usize, edges: usize) -> RoadGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = RoadGraph::builder();
    let mut points = Vec::with_capacity(nodes);

    for id in 0..nodes {
        let point = GeoPoint::new(
            50.0 + rng.random_range(0.0..0.03),
            4.0 + rng.random_range(0.0..0.03),
        );
        points.push(point);
        builder.add_node(id as i64, point).unwrap();
    }

    for _ in 0..edges {
        let from = rng.random_range(0..nodes);
        let to = rng.random_range(0..nodes);
        if from == to {
            continue;
        }

        let straight = points[from].haversine_km(&points[to]) * 1000.0;
        let length = straight.max(1.0) * rng.random_range(1.0..1.8);
        let speed = SPEEDS[rng.random_range(0..SPEEDS.len())];
        builder
            .add_edge(from as i64, to as i64, length, speed)
            .unwrap();
    }

    builder.build().unwrap()
}

/// Source and destination pairs drawn from `graph`, start and end always differ.
pub fn random_pairs(seed: u64, graph: &impl Graph, count: usize) -> Vec<(NodeId, NodeId)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(count);

    while pairs.len() < count {
        let start = rng.random_range(0..graph.node_count());
        let end = rng.random_range(0..graph.node_count());
        if start != end {
            pairs.push((start, end));
        }
    }

    pairs
}

/// A -> B -> D against A -> C -> D, the second one is faster.
pub fn diamond() -> RoadGraph {
    let mut builder = RoadGraph::builder();
    builder
        .add_node(1, GeoPoint::new(0.0, -0.015))
        .unwrap()
        .add_node(2, GeoPoint::new(0.003, -0.008))
        .unwrap()
        .add_node(3, GeoPoint::new(0.0, -0.004))
        .unwrap()
        .add_node(4, GeoPoint::new(0.0, 0.0))
        .unwrap();
    builder
        .add_edge(1, 2, 1000.0, 50.0)
        .unwrap()
        .add_edge(1, 3, 2000.0, 100.0)
        .unwrap()
        .add_edge(2, 4, 1000.0, 50.0)
        .unwrap()
        .add_edge(3, 4, 500.0, 100.0)
        .unwrap();
    builder.build().unwrap()
}

/// Two small grids side by side with no road between them.
pub fn two_islands() -> RoadGraph {
    let mut builder = RoadGraph::builder();

    for (offset, lng) in [(0, 0.0), (100, 0.05)] {
        for i in 0..4_i64 {
            let point = GeoPoint::new((i / 2) as f64 * 0.002, lng + (i % 2) as f64 * 0.002);
            builder.add_node(offset + i, point).unwrap();
        }
        for (from, to) in [(0, 1), (1, 0), (0, 2), (2, 0), (1, 3), (3, 1), (2, 3), (3, 2)] {
            builder
                .add_edge(offset + from, offset + to, 300.0, 50.0)
                .unwrap();
        }
    }

    builder.build().unwrap()
}
