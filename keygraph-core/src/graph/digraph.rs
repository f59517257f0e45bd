//! Directed Graph
//!
//! The graph owns every node record, and every record owns its outgoing
//! edges. This keeps three invariants cheap to uphold:
//!
//! 1. An edge can only be added between two nodes that are present, so no
//!    edge ever points at a missing node.
//! 2. Each node's in-degree counter is adjusted on every edge insertion and
//!    removal, so it always equals the number of edges targeting it.
//! 3. A node with a non-zero in-degree cannot be deleted. Removing the
//!    edges that point at it is the caller's job.
//!
//! Every mutating operation validates its preconditions before touching
//! storage, so a call that returns an error is a no-op.
//!
//! # Thread Safety
//!
//! `Graph` does no locking. Share it across threads through
//! [`SharedGraph`](crate::SharedGraph) or your own synchronization.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use super::edge::{Edge, Weight};
use super::node::NodeRecord;
use crate::config::{DuplicateEdgePolicy, GraphConfig};
use crate::error::{GraphError, GraphResult};

/// A mutable directed graph with optional node payloads and weighted edges.
///
/// # Type Parameters
///
/// - `N`: the node id. Must be hashable, comparable and cloneable; ids are
///   copied into edge maps and error values.
/// - `V`: the node payload. No requirements.
///
/// # Example
///
/// ```
/// use keygraph_core::{Graph, GraphError};
///
/// let mut graph: Graph<&str, ()> = Graph::new();
/// graph.add_node("A").unwrap();
/// graph.add_node("B").unwrap();
/// graph.add_edge(&"A", &"B", 5).unwrap();
///
/// assert_eq!(graph.edges_of(&"A").unwrap().get(&"B"), Some(&5));
/// assert!(matches!(
///     graph.delete_node(&"B"),
///     Err(GraphError::HasIncomingEdges { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N, V> {
    /// All node records, in insertion order.
    pub(crate) nodes: IndexMap<N, NodeRecord<N, V>>,

    /// Total number of edges across all records.
    pub(crate) edge_count: usize,

    config: GraphConfig,
}

impl<N, V> Graph<N, V>
where
    N: Hash + Eq + Clone + Debug,
{
    /// Create an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GraphConfig::default().with_initial_capacity(capacity))
    }

    /// Create an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            nodes: IndexMap::with_capacity(config.initial_capacity),
            edge_count: 0,
            config,
        }
    }

    /// Get the configuration this graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    fn record(&self, id: &N) -> GraphResult<&NodeRecord<N, V>, N> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::UnknownNode(id.clone()))
    }

    fn record_mut(&mut self, id: &N) -> GraphResult<&mut NodeRecord<N, V>, N> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::UnknownNode(id.clone()))
    }

    fn payload_record(&self, id: &N) -> GraphResult<&NodeRecord<N, V>, N> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))
    }

    fn payload_record_mut(&mut self, id: &N) -> GraphResult<&mut NodeRecord<N, V>, N> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))
    }

    /// Add a node without a payload.
    pub fn add_node(&mut self, id: N) -> GraphResult<(), N> {
        self.insert_node(id, None)
    }

    /// Add a node carrying `value`.
    pub fn add_node_with_value(&mut self, id: N, value: V) -> GraphResult<(), N> {
        self.insert_node(id, Some(value))
    }

    fn insert_node(&mut self, id: N, value: Option<V>) -> GraphResult<(), N> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        debug!(node = ?id, "adding node");
        self.nodes.insert(id, NodeRecord::new(value));
        Ok(())
    }

    /// Check whether `id` is present.
    pub fn contains_node(&self, id: &N) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get the full record of a node, if present.
    pub fn node(&self, id: &N) -> Option<&NodeRecord<N, V>> {
        self.nodes.get(id)
    }

    /// Get a node's payload. `Ok(None)` means the node exists without one.
    pub fn node_value(&self, id: &N) -> GraphResult<Option<&V>, N> {
        Ok(self.payload_record(id)?.value())
    }

    /// Get a node's payload mutably.
    pub fn node_value_mut(&mut self, id: &N) -> GraphResult<Option<&mut V>, N> {
        Ok(self.payload_record_mut(id)?.value_mut())
    }

    /// Set a node's payload, returning the previous one.
    pub fn set_node_value(&mut self, id: &N, value: V) -> GraphResult<Option<V>, N> {
        let record = self.payload_record_mut(id)?;
        trace!(node = ?id, "setting node value");
        Ok(record.set_value(value))
    }

    /// Remove a node's payload, leaving the node in place.
    pub fn take_node_value(&mut self, id: &N) -> GraphResult<Option<V>, N> {
        Ok(self.payload_record_mut(id)?.take_value())
    }

    /// Delete a node and all of its outgoing edges, returning its payload.
    ///
    /// Refused with [`GraphError::HasIncomingEdges`] while any edge points
    /// at the node, including a self-loop.
    pub fn delete_node(&mut self, id: &N) -> GraphResult<Option<V>, N> {
        let record = self.record(id)?;
        if record.has_incoming() {
            return Err(GraphError::HasIncomingEdges {
                node: id.clone(),
                count: record.in_degree(),
            });
        }

        self.remove_all_edges(id)?;
        let record = self
            .nodes
            .shift_remove(id)
            .ok_or_else(|| GraphError::UnknownNode(id.clone()))?;
        debug!(node = ?id, "deleted node");
        Ok(record.into_value())
    }

    /// Check whether any edge points at `id`.
    pub fn has_incoming_edges(&self, id: &N) -> GraphResult<bool, N> {
        Ok(self.record(id)?.has_incoming())
    }

    /// Number of edges pointing at `id`.
    pub fn in_degree(&self, id: &N) -> GraphResult<usize, N> {
        Ok(self.record(id)?.in_degree())
    }

    /// Check whether `id` has no outgoing edges.
    pub fn has_no_children(&self, id: &N) -> GraphResult<bool, N> {
        Ok(self.record(id)?.out_degree() == 0)
    }

    /// Number of outgoing edges of `id`.
    pub fn num_children(&self, id: &N) -> GraphResult<usize, N> {
        Ok(self.record(id)?.out_degree())
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes. Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Snapshot of all node ids, in insertion order.
    pub fn node_names(&self) -> IndexSet<N> {
        self.nodes.keys().cloned().collect()
    }

    /// Iterate over nodes and their payloads, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&N, Option<&V>)> + '_ {
        self.nodes.iter().map(|(id, record)| (id, record.value()))
    }

    /// Remove every node and edge. The configuration is kept.
    pub fn clear(&mut self) {
        debug!(nodes = self.nodes.len(), edges = self.edge_count, "clearing graph");
        self.nodes.clear();
        self.edge_count = 0;
    }

    /// Add an edge from `source` to `target` with `weight`.
    ///
    /// Returns `Ok(true)` when a new edge was created. If the pair is already
    /// connected, the outcome depends on the configured
    /// [`DuplicateEdgePolicy`]: the call is a no-op, overwrites the weight,
    /// or fails. In all three cases `Ok(false)` or the error is returned and
    /// in-degrees are untouched.
    pub fn add_edge(&mut self, source: &N, target: &N, weight: Weight) -> GraphResult<bool, N> {
        if !self.nodes.contains_key(source) {
            return Err(GraphError::UnknownNode(source.clone()));
        }
        if !self.nodes.contains_key(target) {
            return Err(GraphError::UnknownNode(target.clone()));
        }

        let policy = self.config.duplicate_edges;
        let record = self.record_mut(source)?;
        if record.has_edge_to(target) {
            return match policy {
                DuplicateEdgePolicy::KeepExisting => {
                    trace!(?source, ?target, "edge already present, keeping weight");
                    Ok(false)
                }
                DuplicateEdgePolicy::Replace => {
                    let old = record.set_edge_weight(target, weight);
                    trace!(?source, ?target, ?old, weight, "replaced edge weight");
                    Ok(false)
                }
                DuplicateEdgePolicy::Reject => Err(GraphError::DuplicateEdge {
                    from: source.clone(),
                    to: target.clone(),
                }),
            };
        }

        record.insert_edge(target.clone(), weight);
        self.record_mut(target)?.inc_incoming();
        self.edge_count += 1;
        trace!(?source, ?target, weight, "added edge");
        Ok(true)
    }

    /// Add an edge with weight `0`.
    pub fn add_edge_default(&mut self, source: &N, target: &N) -> GraphResult<bool, N> {
        self.add_edge(source, target, 0)
    }

    /// Check for an edge from `source` to `target`, ignoring its weight.
    pub fn contains_edge(&self, source: &N, target: &N) -> GraphResult<bool, N> {
        Ok(self.record(source)?.has_edge_to(target))
    }

    /// Get the weight of the edge from `source` to `target`, if any.
    pub fn edge_weight(&self, source: &N, target: &N) -> GraphResult<Option<Weight>, N> {
        Ok(self.record(source)?.outgoing().get(target).copied())
    }

    /// Snapshot of `source`'s outgoing edges as a target-to-weight map.
    pub fn edges_of(&self, source: &N) -> GraphResult<IndexMap<N, Weight>, N> {
        Ok(self.record(source)?.outgoing().clone())
    }

    /// Borrow `source`'s outgoing edges without copying them.
    pub fn outgoing(&self, source: &N) -> GraphResult<&IndexMap<N, Weight>, N> {
        Ok(self.record(source)?.outgoing())
    }

    /// Iterate over every edge in the graph, grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_, N>> + '_ {
        self.nodes.iter().flat_map(|(source, record)| {
            record.outgoing().iter().map(move |(target, &weight)| Edge {
                source,
                target,
                weight,
            })
        })
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Remove the edge from `source` to `target`, returning its weight.
    ///
    /// Fails with [`GraphError::EdgeNotFound`] if the edge is absent, which
    /// includes the case where `source` itself is absent.
    pub fn remove_edge(&mut self, source: &N, target: &N) -> GraphResult<Weight, N> {
        let weight = self
            .nodes
            .get_mut(source)
            .and_then(|record| record.remove_edge(target))
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: source.clone(),
                to: target.clone(),
            })?;

        if let Some(record) = self.nodes.get_mut(target) {
            record.dec_incoming();
        }
        self.edge_count -= 1;
        trace!(?source, ?target, weight, "removed edge");
        Ok(weight)
    }

    /// Remove every outgoing edge of `source`, returning how many were removed.
    pub fn remove_all_edges(&mut self, source: &N) -> GraphResult<usize, N> {
        let edges = self.record_mut(source)?.take_edges();

        for target in edges.keys() {
            if let Some(record) = self.nodes.get_mut(target) {
                record.dec_incoming();
            }
        }
        self.edge_count -= edges.len();
        trace!(?source, removed = edges.len(), "removed all outgoing edges");
        Ok(edges.len())
    }
}

impl<N, V> Default for Graph<N, V>
where
    N: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
