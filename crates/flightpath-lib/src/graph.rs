//! Directed weighted graph over string-identified airports.
//!
//! Nodes live in a dense slot vector addressed by [`NodeIndex`]; a hash map
//! resolves airport codes to slots. Each slot owns its outgoing edges (target
//! index plus payload) and the indices of the nodes that point at it, so the
//! edge count, the origin's outgoing list, and the destination's incoming list
//! are always updated together.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::flight::{EdgeWeight, Flight};

/// Position of a node inside the graph's slot vector.
pub type NodeIndex = usize;

/// Outgoing edge stored on its origin node.
#[derive(Debug, Clone)]
pub(crate) struct OutEdge<W> {
    pub(crate) target: NodeIndex,
    pub(crate) weight: W,
}

#[derive(Debug, Clone)]
struct NodeSlot<W> {
    id: String,
    outgoing: Vec<OutEdge<W>>,
    incoming: Vec<NodeIndex>,
}

impl<W> NodeSlot<W> {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }
}

/// Directed graph with at most one edge per ordered node pair.
#[derive(Debug, Clone)]
pub struct WeightedGraph<W = Flight> {
    slots: Vec<Option<NodeSlot<W>>>,
    index: HashMap<String, NodeIndex>,
    vacant: Vec<NodeIndex>,
    edge_count: usize,
}

impl<W> Default for WeightedGraph<W> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            vacant: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<W: EdgeWeight> WeightedGraph<W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Returns `false` without changes if it already exists or
    /// the identifier is empty.
    pub fn insert_node(&mut self, id: &str) -> bool {
        if id.is_empty() || self.index.contains_key(id) {
            return false;
        }

        let slot = NodeSlot::new(id);
        let idx = match self.vacant.pop() {
            Some(idx) => {
                self.slots[idx] = Some(slot);
                idx
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        };
        self.index.insert(id.to_string(), idx);
        true
    }

    /// Remove a node together with every edge entering or leaving it.
    ///
    /// Returns `Ok(false)` when the node is absent. An empty identifier is
    /// rejected with [`Error::UnknownNode`].
    pub fn remove_node(&mut self, id: &str) -> Result<bool> {
        if id.is_empty() {
            return Err(Error::unknown_node(id));
        }
        let Some(idx) = self.index.remove(id) else {
            return Ok(false);
        };
        let Some(slot) = self.slots[idx].take() else {
            return Ok(false);
        };

        let mut removed = 0;
        for edge in &slot.outgoing {
            removed += 1;
            if edge.target == idx {
                continue;
            }
            if let Some(target) = self.slots[edge.target].as_mut() {
                target.incoming.retain(|&origin| origin != idx);
            }
        }
        for &origin in &slot.incoming {
            if origin == idx {
                continue;
            }
            removed += 1;
            if let Some(source) = self.slots[origin].as_mut() {
                source.outgoing.retain(|edge| edge.target != idx);
            }
        }

        self.edge_count -= removed;
        self.vacant.push(idx);
        tracing::trace!(node = id, edges = removed, "removed node");
        Ok(true)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Insert a directed edge.
    ///
    /// Returns `false` when either endpoint is missing. Inserting an edge for
    /// a pair that is already connected leaves the existing payload in place
    /// and still reports success.
    pub fn insert_edge(&mut self, origin: &str, destination: &str, weight: W) -> bool {
        let (Some(from), Some(to)) = (self.node_index(origin), self.node_index(destination))
        else {
            return false;
        };
        if self.find_out_edge(from, to).is_some() {
            return true;
        }

        if let Some(slot) = self.slots[from].as_mut() {
            slot.outgoing.push(OutEdge { target: to, weight });
        }
        if let Some(slot) = self.slots[to].as_mut() {
            slot.incoming.push(from);
        }
        self.edge_count += 1;
        true
    }

    /// Remove the edge between two nodes. Returns `false` if there is none.
    pub fn remove_edge(&mut self, origin: &str, destination: &str) -> bool {
        self.take_edge(origin, destination).is_some()
    }

    /// Remove the edge between two nodes and hand back its payload.
    pub fn take_edge(&mut self, origin: &str, destination: &str) -> Option<W> {
        let from = self.node_index(origin)?;
        let to = self.node_index(destination)?;
        let position = self.find_out_edge(from, to)?;

        let edge = self.slots[from].as_mut()?.outgoing.remove(position);
        if let Some(slot) = self.slots[to].as_mut() {
            if let Some(pos) = slot.incoming.iter().position(|&o| o == from) {
                slot.incoming.remove(pos);
            }
        }
        self.edge_count -= 1;
        Some(edge.weight)
    }

    pub fn contains_edge(&self, origin: &str, destination: &str) -> bool {
        self.get_edge(origin, destination).is_ok()
    }

    /// Payload of the edge between two nodes.
    pub fn get_edge(&self, origin: &str, destination: &str) -> Result<&W> {
        let not_found = || Error::edge_not_found(origin, destination);
        let from = self.node_index(origin).ok_or_else(not_found)?;
        let to = self.node_index(destination).ok_or_else(not_found)?;
        let position = self.find_out_edge(from, to).ok_or_else(not_found)?;
        Ok(&self.out_edges(from)[position].weight)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edges leaving a node.
    pub fn out_degree(&self, id: &str) -> Result<usize> {
        let idx = self.node_index(id).ok_or_else(|| Error::unknown_node(id))?;
        Ok(self.out_edges(idx).len())
    }

    /// Node identifiers in slot order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|slot| slot.id.as_str()))
    }

    /// Destinations and payloads of the edges leaving a node.
    pub fn outgoing(&self, id: &str) -> Result<impl Iterator<Item = (&str, &W)> + '_> {
        let idx = self.node_index(id).ok_or_else(|| Error::unknown_node(id))?;
        Ok(self
            .out_edges(idx)
            .iter()
            .map(move |edge| (self.node_id(edge.target), &edge.weight)))
    }

    /// Every edge as `(origin, destination, payload)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &W)> + '_ {
        self.slots.iter().flatten().flat_map(move |slot| {
            slot.outgoing
                .iter()
                .map(move |edge| (slot.id.as_str(), self.node_id(edge.target), &edge.weight))
        })
    }

    pub(crate) fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Upper bound on node indices, including vacated slots.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn node_id(&self, idx: NodeIndex) -> &str {
        self.slots[idx]
            .as_ref()
            .map(|slot| slot.id.as_str())
            .unwrap_or_default()
    }

    pub(crate) fn out_edges(&self, idx: NodeIndex) -> &[OutEdge<W>] {
        self.slots[idx]
            .as_ref()
            .map(|slot| slot.outgoing.as_slice())
            .unwrap_or(&[])
    }

    /// Linear scan of the origin's outgoing list; branching factor is small.
    fn find_out_edge(&self, from: NodeIndex, to: NodeIndex) -> Option<usize> {
        self.out_edges(from).iter().position(|edge| edge.target == to)
    }

    #[cfg(test)]
    fn incoming_count(&self, id: &str) -> usize {
        self.node_index(id)
            .and_then(|idx| self.slots[idx].as_ref())
            .map(|slot| slot.incoming.len())
            .unwrap_or(0)
    }
}
