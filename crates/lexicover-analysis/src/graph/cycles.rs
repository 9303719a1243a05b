//! Cycle listing for definition graphs.
//!
//! # Edge Direction
//!
//! Edges point from a word to the words defining it. A cycle is a chain of
//! definitions that eventually refers back to its starting word.
//!
//! # Relation to Peeling
//!
//! Peeling to fixpoint keeps exactly the vertices that lie on a cycle or are
//! reachable from one by following outgoing edges. [`cycle_closure`]
//! computes that set directly from the SCC structure, without mutating the
//! graph.

#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeSet, HashSet, VecDeque};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Find all cycles currently present in `graph`.
///
/// Each entry is a sorted list of words in one strongly connected
/// component (SCC). Self-loops are reported as a one-element cycle.
#[must_use]
pub fn find_all_cycles(graph: &DiGraph<String, ()>) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<String>> = cyclic_components(graph)
        .into_iter()
        .map(|component| {
            let mut ids: Vec<String> = component.into_iter().map(|idx| node_id(graph, idx)).collect();
            ids.sort_unstable();
            ids
        })
        .collect();

    cycles.sort_unstable();
    cycles
}

/// Words on a cycle or reachable from one, sorted.
///
/// This is the set that survives peeling to fixpoint.
#[must_use]
pub fn cycle_closure(graph: &DiGraph<String, ()>) -> BTreeSet<String> {
    let mut queue: VecDeque<NodeIndex> = cyclic_components(graph).into_iter().flatten().collect();
    let mut visited: HashSet<NodeIndex> = queue.iter().copied().collect();

    while let Some(current) = queue.pop_front() {
        for edge in graph.edges(current) {
            let next = edge.target();
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited.into_iter().map(|idx| node_id(graph, idx)).collect()
}

/// SCCs with more than one member, plus single self-looped nodes.
fn cyclic_components(graph: &DiGraph<String, ()>) -> Vec<Vec<NodeIndex>> {
    tarjan_scc(graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1 || component.first().is_some_and(|node| has_self_loop(graph, *node))
        })
        .collect()
}

#[must_use]
fn has_self_loop(graph: &DiGraph<String, ()>, node: NodeIndex) -> bool {
    graph.find_edge(node, node).is_some()
}

fn node_id(graph: &DiGraph<String, ()>, idx: NodeIndex) -> String {
    graph
        .node_weight(idx)
        .cloned()
        .unwrap_or_else(|| format!("#{}", idx.index()))
}
