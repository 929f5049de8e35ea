//! Single-source lowest-cost search over a [`WeightedGraph`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::flight::EdgeWeight;
use crate::graph::{NodeIndex, WeightedGraph};
use crate::path::Path;

/// Run Dijkstra's algorithm from `start` and return the cheapest path to
/// `end` by accumulated [`EdgeWeight::value`].
///
/// A request where `start == end` is answered with a zero-cost single-node
/// path before any membership check, so it succeeds even for identifiers the
/// graph does not contain.
///
/// Among frontier entries of equal cost the one pushed first is expanded
/// first. Callers should not rely on which of several equal-cost paths is
/// returned.
pub fn shortest_path<W: EdgeWeight>(
    graph: &WeightedGraph<W>,
    start: &str,
    end: &str,
) -> Result<Path> {
    if start == end {
        return Ok(Path::new(vec![start.to_string()], 0.0));
    }

    let start_idx = graph
        .node_index(start)
        .ok_or_else(|| Error::unknown_node(start))?;
    let end_idx = graph
        .node_index(end)
        .ok_or_else(|| Error::unknown_node(end))?;

    let mut records = vec![SearchRecord {
        node: start_idx,
        cost: 0.0,
        predecessor: None,
    }];
    let mut visited = vec![false; graph.slot_count()];
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry::new(0, 0.0, 0));
    let mut pushes: u64 = 1;

    while let Some(entry) = frontier.pop() {
        let current = records[entry.record];
        if visited[current.node] {
            continue;
        }
        visited[current.node] = true;

        if current.node == end_idx {
            let path = Path::new(reconstruct(graph, &records, entry.record), current.cost);
            tracing::trace!(start, end, cost = current.cost, "search reached goal");
            return Ok(path);
        }

        for edge in graph.out_edges(current.node) {
            if visited[edge.target] {
                continue;
            }
            let cost = current.cost + edge.weight.value();
            records.push(SearchRecord {
                node: edge.target,
                cost,
                predecessor: Some(entry.record),
            });
            frontier.push(FrontierEntry::new(records.len() - 1, cost, pushes));
            pushes += 1;
        }
    }

    Err(Error::NoPathExists {
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Node reached during one search, linked back to the record it came from.
#[derive(Copy, Clone, Debug)]
struct SearchRecord {
    node: NodeIndex,
    cost: f64,
    predecessor: Option<usize>,
}

fn reconstruct<W: EdgeWeight>(
    graph: &WeightedGraph<W>,
    records: &[SearchRecord],
    goal: usize,
) -> Vec<String> {
    let mut nodes = Vec::new();
    let mut current = Some(goal);
    while let Some(record) = current {
        nodes.push(graph.node_id(records[record].node).to_string());
        current = records[record].predecessor;
    }
    nodes.reverse();
    nodes
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    record: usize,
    cost: FloatOrd,
    sequence: u64,
}

impl FrontierEntry {
    fn new(record: usize, cost: f64, sequence: u64) -> Self {
        Self {
            record,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
