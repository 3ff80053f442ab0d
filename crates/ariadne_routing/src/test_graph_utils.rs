#[cfg(test)]
pub mod test_graph {
    use crate::{
        geopoint::GeoPoint,
        graph::Graph,
        road_graph::RoadGraph,
        types::{ExternalNodeId, NodeId},
    };

    pub enum DiamondNode {
        A = 1,
        B = 2,
        C = 3,
        D = 4,
    }

    impl From<DiamondNode> for ExternalNodeId {
        fn from(value: DiamondNode) -> Self {
            value as ExternalNodeId
        }
    }

    pub fn node(graph: &RoadGraph, id: impl Into<ExternalNodeId>) -> NodeId {
        let id = id.into();
        graph
            .node_id(id)
            .unwrap_or_else(|| panic!("node {id} is not in the test graph"))
    }

    /// A -> B -> D is 1 km + 1 km at 50 km/h, A -> C -> D is 2 km + 0.5 km at 100 km/h.
    ///
    /// Coordinates keep every straight line shorter than the road it stands for, so the
    /// travel time heuristic stays admissible.
    pub fn diamond_graph() -> RoadGraph {
        let mut builder = RoadGraph::builder();
        builder
            .add_node(DiamondNode::A.into(), GeoPoint::new(0.0, -0.015))
            .unwrap()
            .add_node(DiamondNode::B.into(), GeoPoint::new(0.003, -0.008))
            .unwrap()
            .add_node(DiamondNode::C.into(), GeoPoint::new(0.0, -0.004))
            .unwrap()
            .add_node(DiamondNode::D.into(), GeoPoint::new(0.0, 0.0))
            .unwrap();

        builder
            .add_edge(DiamondNode::A.into(), DiamondNode::B.into(), 1000.0, 50.0)
            .unwrap()
            .add_edge(DiamondNode::A.into(), DiamondNode::C.into(), 2000.0, 100.0)
            .unwrap()
            .add_edge(DiamondNode::B.into(), DiamondNode::D.into(), 1000.0, 50.0)
            .unwrap()
            .add_edge(DiamondNode::C.into(), DiamondNode::D.into(), 500.0, 100.0)
            .unwrap();

        builder.build().unwrap()
    }

    /// Two clusters roughly 11 km apart without any road between them.
    ///
    /// Nodes 1..=3 form a one-way triangle plus a spur, nodes 10..=12 a chain.
    pub fn disconnected_graph() -> RoadGraph {
        let mut builder = RoadGraph::builder();
        let west = [
            (1, GeoPoint::new(0.0, 0.0)),
            (2, GeoPoint::new(0.001, 0.001)),
            (3, GeoPoint::new(0.0, 0.002)),
            (4, GeoPoint::new(-0.001, 0.001)),
        ];
        let east = [
            (10, GeoPoint::new(0.0, 0.1)),
            (11, GeoPoint::new(0.0, 0.101)),
            (12, GeoPoint::new(0.0, 0.102)),
        ];

        for (id, point) in west.into_iter().chain(east) {
            builder.add_node(id, point).unwrap();
        }

        builder
            .add_edge(1, 2, 200.0, 30.0)
            .unwrap()
            .add_edge(2, 3, 200.0, 30.0)
            .unwrap()
            .add_edge(3, 1, 300.0, 50.0)
            .unwrap()
            .add_edge(1, 4, 200.0, 30.0)
            .unwrap()
            .add_edge(10, 11, 150.0, 50.0)
            .unwrap()
            .add_edge(11, 12, 150.0, 50.0)
            .unwrap();

        builder.build().unwrap()
    }

    pub fn grid_node_id(cols: usize, row: usize, col: usize) -> ExternalNodeId {
        (row * cols + col) as ExternalNodeId
    }

    /// Two-way grid with roughly 220 m between intersections.
    ///
    /// Road lengths are the straight line plus a deterministic detour and speeds cycle
    /// through 30/50/70/90 km/h, which keeps the graph reproducible without an RNG.
    pub fn grid_graph(rows: usize, cols: usize) -> RoadGraph {
        let spacing = 0.002;
        let mut builder = RoadGraph::builder();

        for row in 0..rows {
            for col in 0..cols {
                builder
                    .add_node(
                        grid_node_id(cols, row, col),
                        GeoPoint::new(row as f64 * spacing, col as f64 * spacing),
                    )
                    .unwrap();
            }
        }

        let point = |row: usize, col: usize| {
            GeoPoint::new(row as f64 * spacing, col as f64 * spacing)
        };

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
                    let detour = 1.0 + ((row * 31 + col * 17 + next_row) % 5) as f64 * 0.05;
                    let speed = 30.0 + ((row * 7 + col * 13 + next_col) % 4) as f64 * 20.0;

                    let from = grid_node_id(cols, row, col);
                    let to = grid_node_id(cols, next_row, next_col);
                    builder
                        .add_edge(from, to, straight * detour, speed)
                        .unwrap()
                        .add_edge(to, from, straight * detour, speed)
                        .unwrap();
                }
            }
        }

        builder.build().unwrap()
    }

    /// Sum of `length / 1000` along consecutive nodes.
    pub fn path_length_km(graph: &RoadGraph, nodes: &[NodeId]) -> f64 {
        nodes
            .windows(2)
            .map(|pair| {
                let edge_id = graph.edge_between(pair[0], pair[1]).unwrap();
                graph.edge(edge_id).distance().value() / 1000.0
            })
            .sum()
    }
}
