//! Graph Nodes
//!
//! This module defines the per-node record stored in the graph. A record
//! owns the node's payload, its in-degree counter and its outgoing edges, so
//! a node exists exactly when its record does.

use std::hash::Hash;

use indexmap::IndexMap;

use super::edge::Weight;

/// Everything the graph knows about one node.
#[derive(Debug, Clone)]
pub struct NodeRecord<N, V> {
    /// Optional payload. Nodes added without a value hold `None`.
    value: Option<V>,

    /// Number of edges, graph-wide, whose target is this node.
    incoming: usize,

    /// Outgoing edges keyed by target, in insertion order.
    /// At most one entry per target.
    outgoing: IndexMap<N, Weight>,
}

impl<N, V> NodeRecord<N, V>
where
    N: Hash + Eq,
{
    /// Create a record with no edges in either direction.
    pub fn new(value: Option<V>) -> Self {
        Self {
            value,
            incoming: 0,
            outgoing: IndexMap::new(),
        }
    }

    /// Get the payload.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Get the payload mutably.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// Replace the payload, returning the previous one.
    pub fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    /// Remove the payload, leaving `None`.
    pub fn take_value(&mut self) -> Option<V> {
        self.value.take()
    }

    pub(crate) fn into_value(self) -> Option<V> {
        self.value
    }

    /// Number of edges pointing at this node.
    pub fn in_degree(&self) -> usize {
        self.incoming
    }

    /// Check whether any edge points at this node.
    pub fn has_incoming(&self) -> bool {
        self.incoming != 0
    }

    /// Number of edges leaving this node.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Outgoing edges as a target-to-weight map.
    pub fn outgoing(&self) -> &IndexMap<N, Weight> {
        &self.outgoing
    }

    /// Check for an outgoing edge to `target`.
    pub fn has_edge_to(&self, target: &N) -> bool {
        self.outgoing.contains_key(target)
    }

    pub(crate) fn insert_edge(&mut self, target: N, weight: Weight) -> Option<Weight> {
        self.outgoing.insert(target, weight)
    }

    pub(crate) fn set_edge_weight(&mut self, target: &N, weight: Weight) -> Option<Weight> {
        self.outgoing
            .get_mut(target)
            .map(|w| std::mem::replace(w, weight))
    }

    pub(crate) fn remove_edge(&mut self, target: &N) -> Option<Weight> {
        self.outgoing.shift_remove(target)
    }

    pub(crate) fn take_edges(&mut self) -> IndexMap<N, Weight> {
        std::mem::take(&mut self.outgoing)
    }

    pub(crate) fn inc_incoming(&mut self) {
        self.incoming += 1;
    }

    pub(crate) fn dec_incoming(&mut self) {
        debug_assert!(self.incoming > 0, "in-degree underflow");
        self.incoming = self.incoming.saturating_sub(1);
    }
}

impl<N, V> Default for NodeRecord<N, V>
where
    N: Hash + Eq,
{
    fn default() -> Self {
        Self::new(None)
    }
}
