use serde::Serialize;

use crate::error::Result;
use crate::flight::EdgeWeight;
use crate::graph::WeightedGraph;

/// Route through the graph from origin to destination inclusive.
///
/// Paths are produced by the search and never mutated afterwards. `cost` is
/// the accumulated scalar edge cost at the time the path was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    nodes: Vec<String>,
    cost: f64,
}

impl Path {
    pub fn new(nodes: Vec<String>, cost: f64) -> Self {
        Self { nodes, cost }
    }

    /// Airport codes in travel order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn origin(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Number of intermediate stops. Zero for direct and single-node paths.
    pub fn layover_count(&self) -> usize {
        self.nodes.len().saturating_sub(2)
    }

    /// Consecutive `(origin, destination)` pairs along the path.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Sum of edge distances along the path.
    pub fn total_distance<W: EdgeWeight>(&self, graph: &WeightedGraph<W>) -> Result<f64> {
        self.sum_edges(graph, W::distance)
    }

    /// Sum of edge prices along the path.
    pub fn total_price<W: EdgeWeight>(&self, graph: &WeightedGraph<W>) -> Result<f64> {
        self.sum_edges(graph, W::price)
    }

    fn sum_edges<W: EdgeWeight>(
        &self,
        graph: &WeightedGraph<W>,
        measure: fn(&W) -> f64,
    ) -> Result<f64> {
        self.legs().try_fold(0.0, |total, (origin, destination)| {
            Ok(total + measure(graph.get_edge(origin, destination)?))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::flight::Flight;

    fn nodes(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn layovers_exclude_endpoints() {
        assert_eq!(Path::new(nodes(&["A", "B", "C", "D"]), 0.0).layover_count(), 2);
        assert_eq!(Path::new(nodes(&["A", "B"]), 0.0).layover_count(), 0);
        assert_eq!(Path::new(nodes(&["A"]), 0.0).layover_count(), 0);
    }

    #[test]
    fn totals_follow_edges() {
        let mut graph = WeightedGraph::new();
        for id in ["A", "B", "C"] {
            graph.insert_node(id);
        }
        graph.insert_edge("A", "B", Flight::new("A", "B", 100.0, 500.0));
        graph.insert_edge("B", "C", Flight::new("B", "C", 50.0, 250.0));

        let path = Path::new(nodes(&["A", "B", "C"]), 0.0);
        assert_eq!(path.total_price(&graph).unwrap(), 150.0);
        assert_eq!(path.total_distance(&graph).unwrap(), 750.0);

        let broken = Path::new(nodes(&["A", "C"]), 0.0);
        assert!(matches!(
            broken.total_price(&graph),
            Err(Error::EdgeNotFound { .. })
        ));
    }

    #[test]
    fn single_node_path_has_zero_totals() {
        let graph: WeightedGraph<Flight> = WeightedGraph::new();
        let path = Path::new(nodes(&["A"]), 0.0);
        assert_eq!(path.total_distance(&graph).unwrap(), 0.0);
        assert_eq!(path.origin(), Some("A"));
        assert_eq!(path.destination(), Some("A"));
    }
}
