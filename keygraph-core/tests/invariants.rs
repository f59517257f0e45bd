//! Property tests for the graph's structural invariants.
//!
//! Random sequences of mutations are applied to a small id space so that
//! collisions (duplicate nodes, repeated edges, self-loops, deletes of
//! referenced nodes) happen often. After every step the graph must still be
//! consistent, and every rejected step must have left it untouched.

use keygraph_core::{Graph, Weight};
use proptest::prelude::*;

type Snapshot = Vec<(u8, Option<u32>, usize, Vec<(u8, Weight)>)>;

#[derive(Debug, Clone)]
enum Op {
    AddNode(u8, Option<u32>),
    AddEdge(u8, u8, Weight),
    RemoveEdge(u8, u8),
    RemoveAllEdges(u8),
    DeleteNode(u8),
    SetValue(u8, u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let id = 0u8..6;
    prop_oneof![
        3 => (id.clone(), proptest::option::of(any::<u32>())).prop_map(|(n, v)| Op::AddNode(n, v)),
        4 => (id.clone(), id.clone(), -5i64..5).prop_map(|(a, b, w)| Op::AddEdge(a, b, w)),
        2 => (id.clone(), id.clone()).prop_map(|(a, b)| Op::RemoveEdge(a, b)),
        1 => id.clone().prop_map(Op::RemoveAllEdges),
        2 => id.clone().prop_map(Op::DeleteNode),
        1 => (id, any::<u32>()).prop_map(|(n, v)| Op::SetValue(n, v)),
    ]
}

fn snapshot(graph: &Graph<u8, u32>) -> Snapshot {
    graph
        .nodes()
        .map(|(&id, value)| {
            let edges = graph
                .outgoing(&id)
                .unwrap()
                .iter()
                .map(|(&t, &w)| (t, w))
                .collect();
            (id, value.copied(), graph.in_degree(&id).unwrap(), edges)
        })
        .collect()
}

/// Apply `op`, returning whether it succeeded.
fn apply(graph: &mut Graph<u8, u32>, op: &Op) -> bool {
    match *op {
        Op::AddNode(n, Some(v)) => graph.add_node_with_value(n, v).is_ok(),
        Op::AddNode(n, None) => graph.add_node(n).is_ok(),
        Op::AddEdge(a, b, w) => graph.add_edge(&a, &b, w).is_ok(),
        Op::RemoveEdge(a, b) => graph.remove_edge(&a, &b).is_ok(),
        Op::RemoveAllEdges(n) => graph.remove_all_edges(&n).is_ok(),
        Op::DeleteNode(n) => graph.delete_node(&n).is_ok(),
        Op::SetValue(n, v) => graph.set_node_value(&n, v).is_ok(),
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_every_step(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut graph: Graph<u8, u32> = Graph::new();

        for op in &ops {
            let before = snapshot(&graph);
            let ok = apply(&mut graph, op);

            prop_assert!(graph.check_invariants().is_ok(), "after {:?}: {:?}", op, graph.check_invariants());
            if !ok {
                prop_assert_eq!(&before, &snapshot(&graph), "rejected {:?} changed the graph", op);
            }

            // Every edge target is a live node.
            for edge in graph.edges() {
                prop_assert!(graph.contains_node(edge.target));
            }
            prop_assert_eq!(graph.node_names().len(), graph.size());
        }
    }

    #[test]
    fn referenced_nodes_cannot_be_deleted(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut graph: Graph<u8, u32> = Graph::new();
        for op in &ops {
            apply(&mut graph, op);
        }

        for id in graph.node_names() {
            if graph.has_incoming_edges(&id).unwrap() {
                let mut probe = graph.clone();
                prop_assert!(probe.delete_node(&id).is_err());
                prop_assert_eq!(snapshot(&probe), snapshot(&graph));
            }
        }
    }

    #[test]
    fn repeated_edge_keeps_first_weight(w1 in any::<i64>(), w2 in any::<i64>()) {
        let mut graph: Graph<u8, u32> = Graph::new();
        graph.add_node(0).unwrap();
        graph.add_node(1).unwrap();
        graph.add_edge(&0, &1, w1).unwrap();
        graph.add_edge(&0, &1, w2).unwrap();

        prop_assert_eq!(graph.edges_of(&0).unwrap().get(&1).copied(), Some(w1));
        prop_assert_eq!(graph.in_degree(&1).unwrap(), 1);
    }
}
