//! Invariant checking.
//!
//! The mutation API keeps these invariants on its own; this pass exists for
//! tests and debug assertions in client code.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::warn;

use super::digraph::Graph;
use crate::error::{GraphError, GraphResult};

impl<N, V> Graph<N, V>
where
    N: Hash + Eq + Clone + Debug,
{
    /// Verify the graph's structural invariants.
    ///
    /// Checks that every edge targets a present node, that every node's
    /// in-degree matches the edges pointing at it, and that the cached edge
    /// total is right. One edge per ordered pair holds by construction, since
    /// outgoing edges are keyed by target.
    pub fn check_invariants(&self) -> GraphResult<(), N> {
        let mut expected: HashMap<&N, usize> = HashMap::with_capacity(self.nodes.len());
        let mut total = 0;

        for (source, record) in &self.nodes {
            for target in record.outgoing().keys() {
                if !self.nodes.contains_key(target) {
                    return Err(violation(format!(
                        "edge {source:?} -> {target:?} points at a missing node"
                    )));
                }
                *expected.entry(target).or_insert(0) += 1;
                total += 1;
            }
        }

        for (id, record) in &self.nodes {
            let actual = expected.get(id).copied().unwrap_or(0);
            if record.in_degree() != actual {
                return Err(violation(format!(
                    "node {id:?} records in-degree {} but {actual} edge(s) target it",
                    record.in_degree()
                )));
            }
        }

        if total != self.edge_count {
            return Err(violation(format!(
                "edge count is {} but {total} edge(s) are stored",
                self.edge_count
            )));
        }

        Ok(())
    }
}

fn violation<N>(what: String) -> GraphError<N> {
    warn!(%what, "graph invariant violated");
    GraphError::InvariantViolated(what)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph<u32, ()> {
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_node(id).unwrap();
        }
        for id in 0..3 {
            graph.add_edge(&id, &(id + 1), 1).unwrap();
        }
        graph
    }

    #[test]
    fn valid_graph_passes() {
        let mut graph = chain();
        graph.check_invariants().unwrap();

        graph.remove_edge(&0, &1).unwrap();
        graph.delete_node(&0).unwrap();
        graph.add_edge(&3, &1, 2).unwrap();
        graph.check_invariants().unwrap();
    }

    #[test]
    fn detects_dangling_edge() {
        let mut graph = chain();
        graph.nodes.get_mut(&3).unwrap().insert_edge(99, 0);
        graph.edge_count += 1;

        let err = graph.check_invariants().unwrap_err();
        assert!(matches!(err, GraphError::InvariantViolated(ref what) if what.contains("99")));
    }

    #[test]
    fn detects_stale_in_degree() {
        let mut graph = chain();
        graph.nodes.get_mut(&2).unwrap().inc_incoming();

        let err = graph.check_invariants().unwrap_err();
        assert_eq!(
            err,
            GraphError::InvariantViolated(
                "node 2 records in-degree 2 but 1 edge(s) target it".into()
            )
        );
    }

    #[test]
    fn detects_wrong_edge_total() {
        let mut graph = chain();
        graph.edge_count = 7;
        assert!(graph.check_invariants().is_err());
    }
}
