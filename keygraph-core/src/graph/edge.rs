//! Graph Edges
//!
//! Edges are stored inside their source node's record as a target-to-weight
//! map. [`Edge`] is the borrowed view handed out when iterating.

/// Edge weight. Edges added without an explicit weight get `0`.
pub type Weight = i64;

/// A directed edge borrowed from a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<'a, N> {
    /// Node the edge leaves.
    pub source: &'a N,
    /// Node the edge points at.
    pub target: &'a N,
    /// Edge weight.
    pub weight: Weight,
}

impl<N> Edge<'_, N> {
    /// Check whether the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.source == self.target
    }
}
