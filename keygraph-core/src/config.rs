//! Graph Configuration
//!
//! A graph is configured once, at construction. The only behavioral knob is
//! what happens when an edge is added between a pair that is already
//! connected; the rest are allocation hints.

/// What [`Graph::add_edge`](crate::Graph::add_edge) does when an edge already
/// exists between the same ordered pair.
///
/// Edge identity is the `(source, target)` pair alone, so the weight of the
/// second call can never produce a second edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateEdgePolicy {
    /// Leave the existing edge and its weight untouched. The first write wins.
    #[default]
    KeepExisting,

    /// Overwrite the existing edge's weight. In-degrees are unchanged.
    Replace,

    /// Fail with [`GraphError::DuplicateEdge`](crate::GraphError::DuplicateEdge).
    Reject,
}

/// Construction-time settings for a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Policy applied to repeated `add_edge` calls on the same pair.
    pub duplicate_edges: DuplicateEdgePolicy,

    /// Number of nodes to reserve space for up front.
    pub initial_capacity: usize,
}

impl GraphConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-edge policy.
    pub fn with_duplicate_edges(mut self, policy: DuplicateEdgePolicy) -> Self {
        self.duplicate_edges = policy;
        self
    }

    /// Set the node capacity hint.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
