//! Basic statistics for a definition graph.
//!
//! # Statistics Provided
//!
//! - **node_count**: Total number of words.
//! - **edge_count**: Total number of `word → defining word` edges.
//! - **density**: `edge_count / (node_count * (node_count - 1))`. Zero for
//!   graphs with fewer than two nodes.
//! - **scc_count**: Number of strongly connected components.
//! - **cycle_count**: SCCs with more than one member, plus self-loops.
//! - **weakly_connected_component_count**: Disjoint subgraphs when edge
//!   direction is ignored.
//! - **isolated_node_count**: Words with no edges at all.
//! - **free_node_count**: Words with in-degree zero (never used to define
//!   another word).
//! - **max_in_degree** / **max_out_degree**: Highest degrees in the graph.
//! - **kernel_size**: Words that survive peeling to fixpoint.

use petgraph::{
    Direction,
    algo::{connected_components, tarjan_scc},
    visit::IntoNodeIdentifiers,
};
use serde::Serialize;

use crate::graph::build::RawGraph;
use crate::graph::cycles::{cycle_closure, find_all_cycles};

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for a definition graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of words (nodes) in the graph.
    pub node_count: usize,
    /// Number of definition edges.
    pub edge_count: usize,
    /// Graph density: `edge_count / (node_count * (node_count - 1))`.
    pub density: f64,
    /// Number of strongly connected components.
    pub scc_count: usize,
    /// Number of cyclic components (multi-member SCCs and self-loops).
    pub cycle_count: usize,
    /// Number of weakly connected components (disjoint subgraphs).
    pub weakly_connected_component_count: usize,
    /// Number of nodes with no in-edges and no out-edges.
    pub isolated_node_count: usize,
    /// Number of nodes with no in-edges.
    pub free_node_count: usize,
    /// Maximum in-degree.
    pub max_in_degree: usize,
    /// Maximum out-degree.
    pub max_out_degree: usize,
    /// Nodes left after peeling to fixpoint.
    pub kernel_size: usize,
    /// Content hash of the projected graph.
    pub content_hash: String,
}

impl GraphStats {
    /// Compute statistics from a [`RawGraph`].
    #[must_use]
    pub fn from_raw(raw: &RawGraph) -> Self {
        let graph = &raw.graph;
        let node_count = raw.node_count();
        let edge_count = raw.edge_count();

        let degree = |idx, dir| graph.neighbors_directed(idx, dir).count();

        let isolated_node_count = graph
            .node_identifiers()
            .filter(|&idx| {
                degree(idx, Direction::Incoming) == 0 && degree(idx, Direction::Outgoing) == 0
            })
            .count();

        let free_node_count = graph
            .node_identifiers()
            .filter(|&idx| degree(idx, Direction::Incoming) == 0)
            .count();

        let max_in_degree = graph
            .node_identifiers()
            .map(|idx| degree(idx, Direction::Incoming))
            .max()
            .unwrap_or(0);

        let max_out_degree = graph
            .node_identifiers()
            .map(|idx| degree(idx, Direction::Outgoing))
            .max()
            .unwrap_or(0);

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            scc_count: tarjan_scc(graph).len(),
            cycle_count: find_all_cycles(graph).len(),
            weakly_connected_component_count: connected_components(graph),
            isolated_node_count,
            free_node_count,
            max_in_degree,
            max_out_degree,
            kernel_size: cycle_closure(graph).len(),
            content_hash: raw.content_hash.clone(),
        }
    }

    /// Return `true` if the graph contains at least one cycle.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        self.cycle_count > 0
    }

    /// Return `true` if peeling alone empties the graph.
    #[must_use]
    pub fn is_peelable(&self) -> bool {
        self.kernel_size == 0
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
