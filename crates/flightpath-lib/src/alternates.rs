//! Approximate second and third cheapest routes.
//!
//! The finder does not run a general k-shortest-paths algorithm. It takes the
//! cheapest path, removes its edges one at a time and searches again, keeping
//! the cheapest survivor as the second route. The third route comes from
//! removing one edge of the first route together with one edge of the second.
//! Routes that share no edge with these removals in the right combination can
//! be missed; the result is the best route this bounded probe finds.
//!
//! Probes run on a private copy of the caller's graph. Each removal is held by
//! an `EdgeRemoval` guard that reinserts the edges (in reverse order) when it
//! goes out of scope, so the copy is whole again after every trial no matter
//! how the trial ended.

use crate::error::{Error, Result};
use crate::flight::EdgeWeight;
use crate::graph::WeightedGraph;
use crate::path::Path;
use crate::search::shortest_path;

/// Upper bound on the number of routes returned by [`top_paths`].
pub const MAX_ROUTES: usize = 3;

/// Compute up to [`MAX_ROUTES`] routes between two airports, cheapest first.
pub fn top_paths<W: EdgeWeight + Clone>(
    graph: &WeightedGraph<W>,
    start: &str,
    end: &str,
) -> Result<Vec<Path>> {
    AlternatePathFinder::new(graph).top_paths(start, end)
}

/// Runs the remove/search/restore probes for one graph.
#[derive(Debug)]
pub struct AlternatePathFinder<'g, W> {
    graph: &'g WeightedGraph<W>,
}

impl<'g, W: EdgeWeight + Clone> AlternatePathFinder<'g, W> {
    pub fn new(graph: &'g WeightedGraph<W>) -> Self {
        Self { graph }
    }

    /// Cheapest path followed by up to two alternates.
    ///
    /// Errors from the primary search (unknown airports, unreachable
    /// destination) propagate. Failed alternate probes are skipped, so the
    /// returned list may hold fewer than three paths.
    pub fn top_paths(&self, start: &str, end: &str) -> Result<Vec<Path>> {
        let primary = shortest_path(self.graph, start, end)?;
        let mut scratch = self.graph.clone();
        let mut paths = Vec::with_capacity(MAX_ROUTES);

        let second = best_single_removal(&mut scratch, &primary, start, end)?;
        let third = match &second {
            Some(second) => best_double_removal(&mut scratch, &primary, second, start, end)?,
            None => None,
        };

        tracing::debug!(
            start,
            end,
            second = second.is_some(),
            third = third.is_some(),
            "alternate route search finished"
        );

        paths.push(primary);
        paths.extend(second);
        paths.extend(third);
        Ok(paths)
    }
}

fn best_single_removal<W: EdgeWeight>(
    scratch: &mut WeightedGraph<W>,
    primary: &Path,
    start: &str,
    end: &str,
) -> Result<Option<Path>> {
    let mut best = None;
    for (origin, destination) in primary.legs() {
        let mut probe = EdgeRemoval::new(scratch);
        let candidate = probe
            .remove(origin, destination)
            .and_then(|()| probe.search(start, end));
        keep_cheaper(&mut best, candidate)?;
    }
    Ok(best)
}

fn best_double_removal<W: EdgeWeight>(
    scratch: &mut WeightedGraph<W>,
    primary: &Path,
    secondary: &Path,
    start: &str,
    end: &str,
) -> Result<Option<Path>> {
    let mut best = None;
    for (first_origin, first_destination) in primary.legs() {
        let mut outer = EdgeRemoval::new(scratch);
        if let Err(err) = outer.remove(first_origin, first_destination) {
            keep_cheaper(&mut best, Err(err))?;
            continue;
        }

        for (origin, destination) in secondary.legs() {
            let mut inner = outer.nested();
            let candidate = inner
                .remove(origin, destination)
                .and_then(|()| inner.search(start, end));
            keep_cheaper(&mut best, candidate)?;
        }
    }
    Ok(best)
}

/// Replace `best` with `candidate` when it is strictly cheaper. Expected probe
/// failures are absorbed; anything else propagates.
fn keep_cheaper(best: &mut Option<Path>, candidate: Result<Path>) -> Result<()> {
    match candidate {
        Ok(path) => {
            if best.as_ref().map_or(true, |current| path.cost() < current.cost()) {
                *best = Some(path);
            }
            Ok(())
        }
        Err(err) if err.is_probe_failure() => {
            tracing::trace!(%err, "alternate probe skipped");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Edges temporarily taken out of a graph; reinserted on drop.
struct EdgeRemoval<'a, W: EdgeWeight> {
    graph: &'a mut WeightedGraph<W>,
    removed: Vec<(String, String, W)>,
}

impl<'a, W: EdgeWeight> EdgeRemoval<'a, W> {
    fn new(graph: &'a mut WeightedGraph<W>) -> Self {
        Self {
            graph,
            removed: Vec::new(),
        }
    }

    fn remove(&mut self, origin: &str, destination: &str) -> Result<()> {
        let weight = self
            .graph
            .take_edge(origin, destination)
            .ok_or_else(|| Error::edge_not_found(origin, destination))?;
        self.removed
            .push((origin.to_string(), destination.to_string(), weight));
        Ok(())
    }

    fn search(&self, start: &str, end: &str) -> Result<Path> {
        shortest_path(&*self.graph, start, end)
    }

    /// Further removals on the same graph, restored before this guard's own.
    fn nested(&mut self) -> EdgeRemoval<'_, W> {
        EdgeRemoval::new(&mut *self.graph)
    }
}

impl<W: EdgeWeight> Drop for EdgeRemoval<'_, W> {
    fn drop(&mut self) {
        while let Some((origin, destination, weight)) = self.removed.pop() {
            self.graph.insert_edge(&origin, &destination, weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::Flight;

    fn graph(nodes: &[&str], edges: &[(&str, &str, f64, f64)]) -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        for node in nodes {
            graph.insert_node(node);
        }
        for &(origin, destination, price, distance) in edges {
            graph.insert_edge(origin, destination, Flight::new(origin, destination, price, distance));
        }
        graph
    }

    fn edge_snapshot(graph: &WeightedGraph) -> Vec<(String, String, f64, f64)> {
        let mut edges: Vec<_> = graph
            .edges()
            .map(|(o, d, f)| (o.to_string(), d.to_string(), f.price, f.distance))
            .collect();
        edges.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
        edges
    }

    #[test]
    fn guard_restores_edges_in_reverse_order() {
        let mut g = graph(
            &["A", "B", "C"],
            &[("A", "B", 1.0, 1.0), ("B", "C", 2.0, 2.0)],
        );
        let before = edge_snapshot(&g);
        {
            let mut outer = EdgeRemoval::new(&mut g);
            outer.remove("A", "B").unwrap();
            {
                let mut inner = outer.nested();
                inner.remove("B", "C").unwrap();
                assert!(inner.remove("A", "B").is_err());
                assert!(inner.search("A", "C").is_err());
            }
            assert!(outer.graph.contains_edge("B", "C"));
            assert!(!outer.graph.contains_edge("A", "B"));
        }
        assert_eq!(g.edge_count(), 2);
        assert_eq!(edge_snapshot(&g), before);
    }

    #[test]
    fn single_route_has_no_alternates() {
        let g = graph(&["A", "B"], &[("A", "B", 10.0, 10.0)]);
        let paths = top_paths(&g, "A", "B").unwrap();
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn three_disjoint_routes_are_ranked() {
        let g = graph(
            &["A", "B", "C", "D", "E"],
            &[
                ("A", "B", 10.0, 0.0),
                ("B", "E", 10.0, 0.0),
                ("A", "C", 20.0, 0.0),
                ("C", "E", 20.0, 0.0),
                ("A", "D", 30.0, 0.0),
                ("D", "E", 30.0, 0.0),
            ],
        );
        let paths = top_paths(&g, "A", "E").unwrap();
        let routes: Vec<_> = paths.iter().map(|p| p.nodes().join("-")).collect();
        assert_eq!(routes, vec!["A-B-E", "A-C-E", "A-D-E"]);
        assert!(paths.windows(2).all(|w| w[0].cost() <= w[1].cost()));
    }

    #[test]
    fn self_route_returns_single_path() {
        let g = graph(&["A"], &[]);
        let paths = top_paths(&g, "A", "A").unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes(), ["A"]);
    }

    #[test]
    fn primary_failures_propagate() {
        let g = graph(&["A", "B"], &[]);
        assert!(matches!(
            top_paths(&g, "A", "B"),
            Err(Error::NoPathExists { .. })
        ));
        assert!(matches!(
            top_paths(&g, "A", "Z"),
            Err(Error::UnknownNode { .. })
        ));
    }
}
