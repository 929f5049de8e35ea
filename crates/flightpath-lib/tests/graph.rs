mod common;

use flightpath_lib::{Error, Flight, WeightedGraph};

use common::{build_graph, diamond_graph};

#[test]
fn node_membership_and_counts() {
    let mut graph: WeightedGraph = WeightedGraph::new();
    assert!(graph.insert_node("MSN"));
    assert!(graph.insert_node("ORD"));
    assert!(!graph.insert_node("MSN"));

    assert_eq!(graph.node_count(), 2);
    assert!(graph.contains_node("ORD"));
    assert!(!graph.contains_node("LAX"));
}

#[test]
fn duplicate_edge_insert_is_idempotent() {
    let mut graph = diamond_graph();
    let before_count = graph.edge_count();
    let before_edge = graph.get_edge("A", "B").unwrap().clone();

    assert!(graph.insert_edge("A", "B", Flight::new("A", "B", 1.0, 1.0)));

    assert_eq!(graph.edge_count(), before_count);
    assert_eq!(graph.get_edge("A", "B").unwrap(), &before_edge);
    assert_eq!(graph.out_degree("A").unwrap(), 2);
}

#[test]
fn removing_node_drops_every_incident_edge() {
    let mut graph = diamond_graph();
    assert!(graph.remove_node("B").unwrap());

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(!graph.contains_edge("A", "B"));
    assert!(!graph.contains_edge("B", "D"));
    assert!(graph.contains_edge("A", "C"));
    assert_eq!(graph.out_degree("A").unwrap(), 1);
}

#[test]
fn get_edge_between_unconnected_nodes_fails() {
    let graph = diamond_graph();
    let err = graph.get_edge("B", "C").unwrap_err();
    assert!(matches!(err, Error::EdgeNotFound { .. }));
    assert!(err.to_string().contains("no flight from B to C"));
}

#[test]
fn out_degree_of_unknown_node_fails() {
    let graph = diamond_graph();
    assert!(matches!(
        graph.out_degree("Z"),
        Err(Error::UnknownNode { id }) if id == "Z"
    ));
}

#[test]
fn edge_removal_then_reinsert_restores_graph() {
    let mut graph = build_graph(&["A", "B"], &[("A", "B", 10.0, 20.0)]);
    let flight = graph.take_edge("A", "B").expect("edge present");
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.remove_edge("A", "B"));

    assert!(graph.insert_edge("A", "B", flight));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge("A", "B").unwrap().distance, 20.0);
}
