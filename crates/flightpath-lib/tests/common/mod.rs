//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use flightpath_lib::{Flight, WeightedGraph};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the sample flight file.
#[allow(dead_code)]
pub fn fixture_flights_path() -> PathBuf {
    fixtures_dir().join("flights.csv")
}

/// Build a graph from node ids and `(origin, destination, price, distance)` rows.
#[allow(dead_code)]
pub fn build_graph(nodes: &[&str], edges: &[(&str, &str, f64, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    for node in nodes {
        graph.insert_node(node);
    }
    for &(origin, destination, price, distance) in edges {
        graph.insert_edge(
            origin,
            destination,
            Flight::new(origin, destination, price, distance),
        );
    }
    graph
}

/// Four airports with exactly two routes from A to D.
#[allow(dead_code)]
pub fn diamond_graph() -> WeightedGraph {
    build_graph(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 100.0, 500.0),
            ("B", "D", 100.0, 500.0),
            ("A", "C", 150.0, 1500.0),
            ("C", "D", 50.0, 1500.0),
        ],
    )
}

/// Sorted `(origin, destination, price, distance)` view of every edge.
#[allow(dead_code)]
pub fn edge_snapshot(graph: &WeightedGraph) -> Vec<(String, String, f64, f64)> {
    let mut edges: Vec<_> = graph
        .edges()
        .map(|(origin, destination, flight)| {
            (
                origin.to_string(),
                destination.to_string(),
                flight.price,
                flight.distance,
            )
        })
        .collect();
    edges.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
    edges
}
