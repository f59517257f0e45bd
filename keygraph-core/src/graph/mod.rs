//! Directed Graph
//!
//! This module implements the graph container: nodes keyed by a
//! caller-chosen id, each with an optional payload, joined by weighted
//! directed edges.
//!
//! # Overview
//!
//! - A node is identified by its id and may carry a payload.
//! - An edge is identified by its ordered `(source, target)` pair and carries
//!   an integer weight. There is at most one edge per pair.
//! - Every node tracks how many edges point at it. A node with incoming
//!   edges cannot be deleted, so no edge can ever dangle.
//!
//! # Design Decisions
//!
//! 1. One map from id to [`NodeRecord`]. The record owns both the payload
//!    and the outgoing edges, so "the node exists" and "the node has an edge
//!    list" cannot drift apart.
//!
//! 2. Incoming edges are a counter, not a reverse index. Nothing here needs
//!    to enumerate predecessors, and the counter is all deletion needs.
//!
//! 3. Maps are `IndexMap`s, so iteration follows insertion order and is
//!    reproducible from run to run.

mod digraph;
mod edge;
mod node;
mod validate;

pub use digraph::Graph;
pub use edge::{Edge, Weight};
pub use node::NodeRecord;
