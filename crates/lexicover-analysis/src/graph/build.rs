//! petgraph projection of a [`DirectedGraph`].
//!
//! # Overview
//!
//! The core graph is tuned for deletion by key. Read-only analyses (SCCs,
//! connectivity, degree summaries) are easier on a [`petgraph`] `DiGraph`,
//! so this module copies the current state of a `DirectedGraph` into one.
//!
//! ## Edge Direction
//!
//! Edges keep the core direction: `word → defining word`.
//!
//! ## Content Hash
//!
//! The projection carries a BLAKE3 hash of the sorted vertex keys and the
//! sorted edge list. Two graphs with the same words and definitions hash
//! identically regardless of the order the dictionary was loaded in.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use lexicover_core::DirectedGraph;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::instrument;

// ---------------------------------------------------------------------------
// RawGraph
// ---------------------------------------------------------------------------

/// A petgraph copy of a [`DirectedGraph`].
///
/// Nodes are word keys. Node indices follow lexicographic key order.
#[derive(Debug)]
pub struct RawGraph {
    /// Directed graph: nodes = words, edges = "is defined using".
    pub graph: DiGraph<String, ()>,
    /// Mapping from word to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// BLAKE3 content hash of the vertex and edge sets.
    pub content_hash: String,
}

impl RawGraph {
    /// Project the current state of `source`.
    #[instrument(skip_all, fields(vertices = source.len()))]
    pub fn from_directed(source: &DirectedGraph) -> Self {
        let mut graph = DiGraph::<String, ()>::with_capacity(source.len(), source.edge_count());
        let mut node_map: HashMap<String, NodeIndex> = HashMap::with_capacity(source.len());

        for key in source.keys() {
            let idx = graph.add_node(key.to_owned());
            node_map.insert(key.to_owned(), idx);
        }

        for (from, to) in source.edges() {
            // Both endpoints are live vertices of `source`.
            if let (Some(&a), Some(&b)) = (node_map.get(from), node_map.get(to)) {
                graph.add_edge(a, b, ());
            }
        }

        let content_hash = compute_content_hash(source);

        Self {
            graph,
            node_map,
            content_hash,
        }
    }

    /// Return the number of nodes (words) in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a word.
    #[must_use]
    pub fn node_index(&self, word: &str) -> Option<NodeIndex> {
        self.node_map.get(word).copied()
    }

    /// Return the word label for a node.
    #[must_use]
    pub fn word(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }
}

/// BLAKE3 over sorted keys, a separator, then sorted `(from, to)` pairs.
fn compute_content_hash(source: &DirectedGraph) -> String {
    let mut hasher = blake3::Hasher::new();
    for key in source.keys() {
        hasher.update(key.as_bytes());
        hasher.update(b"\x00");
    }
    hasher.update(b"\x01");
    for (from, to) in source.edges() {
        hasher.update(from.as_bytes());
        hasher.update(b"\x00");
        hasher.update(to.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
