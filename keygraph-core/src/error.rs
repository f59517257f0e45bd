//! Graph Errors
//!
//! Every failure in this crate is a caller-side precondition violation.
//! Operations check their preconditions before touching storage, so a call
//! that returns an error leaves the graph exactly as it was.

use thiserror::Error;

/// Result alias used by all fallible graph operations.
pub type GraphResult<T, N> = Result<T, GraphError<N>>;

/// Errors returned by [`Graph`](crate::Graph) operations.
///
/// The offending node ids are carried in the error and printed with their
/// `Debug` representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<N> {
    /// A node with this id is already present.
    #[error("node {0:?} is already present")]
    DuplicateNode(N),

    /// An operation referenced a node that is not present.
    #[error("node {0:?} is not present")]
    UnknownNode(N),

    /// A payload read or write targeted a node that is not present.
    #[error("cannot access the value of node {0:?}: node not found")]
    NodeNotFound(N),

    /// The edge to remove does not exist (this includes an absent source).
    #[error("edge {from:?} -> {to:?} cannot be removed as it is not present")]
    EdgeNotFound {
        /// Source of the missing edge.
        from: N,
        /// Target of the missing edge.
        to: N,
    },

    /// The node still has edges pointing at it and cannot be deleted.
    #[error("node {node:?} cannot be deleted while it has {count} incoming edge(s)")]
    HasIncomingEdges {
        /// Node whose deletion was refused.
        node: N,
        /// Its current in-degree.
        count: usize,
    },

    /// An edge already exists between the pair and the graph rejects duplicates.
    #[error("edge {from:?} -> {to:?} is already present")]
    DuplicateEdge {
        /// Source of the existing edge.
        from: N,
        /// Target of the existing edge.
        to: N,
    },

    /// Internal bookkeeping disagrees with the stored edges.
    #[error("graph invariant violated: {0}")]
    InvariantViolated(String),
}

impl<N> GraphError<N> {
    /// Returns the node id the error is about, if it names exactly one node.
    pub fn node(&self) -> Option<&N> {
        match self {
            GraphError::DuplicateNode(n)
            | GraphError::UnknownNode(n)
            | GraphError::NodeNotFound(n)
            | GraphError::HasIncomingEdges { node: n, .. } => Some(n),
            _ => None,
        }
    }
}
