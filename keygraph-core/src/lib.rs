//! Keygraph Core
//!
//! This crate provides a mutable, in-memory directed graph. Nodes are keyed
//! by any hashable id and may carry a payload; edges are directed, weighted,
//! and unique per ordered pair of nodes.
//!
//! The graph enforces its structure on every mutation:
//!
//! - Edges can only connect nodes that are present.
//! - Each node counts its incoming edges, and a node with incoming edges
//!   cannot be deleted, so edges never dangle.
//! - A rejected call leaves the graph unchanged.
//!
//! # Architecture
//!
//! - `graph`: the [`Graph`] container, node records and edge views
//! - `config`: construction-time settings such as the duplicate-edge policy
//! - `error`: the [`GraphError`] taxonomy
//! - `shared`: [`SharedGraph`], a lock-protected handle for multi-threaded use
//!
//! # Example
//!
//! ```rust
//! use keygraph_core::{Graph, GraphError};
//!
//! let mut deps: Graph<&str, u32> = Graph::new();
//! deps.add_node_with_value("app", 1).unwrap();
//! deps.add_node_with_value("lib", 2).unwrap();
//! deps.add_edge(&"app", &"lib", 1).unwrap();
//!
//! // "lib" is still referenced, so it cannot go away yet.
//! assert!(matches!(
//!     deps.delete_node(&"lib"),
//!     Err(GraphError::HasIncomingEdges { .. })
//! ));
//!
//! deps.remove_edge(&"app", &"lib").unwrap();
//! assert_eq!(deps.delete_node(&"lib"), Ok(Some(2)));
//! assert_eq!(deps.size(), 1);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod shared;

pub use config::{DuplicateEdgePolicy, GraphConfig};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, NodeRecord, Weight};
pub use shared::SharedGraph;
