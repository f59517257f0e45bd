//! Shared Graph
//!
//! [`Graph`] itself does no locking. `SharedGraph` puts one behind a single
//! reader-writer lock so it can be handed to several threads. Every
//! operation touches at most two node records, so a finer-grained scheme
//! buys nothing.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::GraphConfig;
use crate::graph::Graph;

/// A cloneable, thread-safe handle to a [`Graph`].
///
/// Clones share the same underlying graph.
///
/// # Example
///
/// ```
/// use keygraph_core::SharedGraph;
///
/// let shared: SharedGraph<u32, &str> = SharedGraph::new();
/// shared.with_write(|g| {
///     g.add_node_with_value(1, "one")?;
///     g.add_node(2)?;
///     g.add_edge(&1, &2, 10)
/// })
/// .unwrap();
///
/// assert_eq!(shared.read().edge_count(), 1);
/// ```
#[derive(Debug)]
pub struct SharedGraph<N, V> {
    inner: Arc<RwLock<Graph<N, V>>>,
}

impl<N, V> SharedGraph<N, V>
where
    N: Hash + Eq + Clone + Debug,
{
    /// Create a handle to a new empty graph.
    pub fn new() -> Self {
        Self::from_graph(Graph::new())
    }

    /// Create a handle to a new empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self::from_graph(Graph::with_config(config))
    }

    /// Wrap an existing graph.
    pub fn from_graph(graph: Graph<N, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Acquire shared read access.
    pub fn read(&self) -> RwLockReadGuard<'_, Graph<N, V>> {
        self.inner.read()
    }

    /// Acquire exclusive write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, Graph<N, V>> {
        self.inner.write()
    }

    /// Run `f` with shared access and return its result.
    pub fn with_read<R>(&self, f: impl FnOnce(&Graph<N, V>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access and return its result.
    ///
    /// The lock is held for the whole closure, so a sequence of operations
    /// inside it is observed by other handles as one step.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut Graph<N, V>) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<N, V> Clone for SharedGraph<N, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N, V> Default for SharedGraph<N, V>
where
    N: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
