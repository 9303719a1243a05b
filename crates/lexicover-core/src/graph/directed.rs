//! Keyed directed graph with mirrored adjacency sets.
//!
//! # Overview
//!
//! Vertices are identified by string keys (case-sensitive, never normalized)
//! and stored in a single ordered map. Every vertex keeps two key sets:
//!
//! - `outgoing`: keys this vertex points at (a word → the words defining it)
//! - `incoming`: keys pointing at this vertex (the words it helps define)
//!
//! Adjacency holds keys, never references, so deleting a vertex is a pure
//! edit of its neighbours' sets.
//!
//! # Invariants
//!
//! - `b ∈ a.outgoing` if and only if `a ∈ b.incoming`.
//! - No adjacency set references a key that is not a live vertex.
//! - Iteration is lexicographic by key, so every derived result is
//!   reproducible across runs.
//!
//! # Tolerant Contract
//!
//! Inserting an existing vertex or edge is a no-op. Connecting to or from a
//! missing key is a no-op. Deleting a missing key is a no-op. None of these
//! are errors; the mutators return `bool` only to report whether anything
//! changed.

#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// Adjacency record for one vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vertex {
    outgoing: BTreeSet<String>,
    incoming: BTreeSet<String>,
}

impl Vertex {
    /// Keys this vertex has an edge to, in lexicographic order.
    pub fn outgoing(&self) -> impl Iterator<Item = &str> {
        self.outgoing.iter().map(String::as_str)
    }

    /// Keys with an edge into this vertex, in lexicographic order.
    pub fn incoming(&self) -> impl Iterator<Item = &str> {
        self.incoming.iter().map(String::as_str)
    }

    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }
}

// ---------------------------------------------------------------------------
// Invariant errors
// ---------------------------------------------------------------------------

/// A broken adjacency invariant found by [`DirectedGraph::check_invariants`].
///
/// The public mutators never produce these; the type exists so tests and
/// debug builds can observe corruption explicitly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphInvariantError {
    /// `from → to` is recorded on `from` but `to` does not list `from` as incoming.
    #[error("edge {from} -> {to} has no mirrored incoming entry")]
    MissingIncoming { from: String, to: String },

    /// `to` lists `from` as incoming but `from` has no outgoing edge to `to`.
    #[error("incoming entry {to} <- {from} has no mirrored outgoing edge")]
    MissingOutgoing { from: String, to: String },

    /// An adjacency set names a vertex that no longer exists.
    #[error("vertex {vertex} references missing vertex {missing}")]
    DanglingReference { vertex: String, missing: String },
}

// ---------------------------------------------------------------------------
// DirectedGraph
// ---------------------------------------------------------------------------

/// An owning, key-addressed directed graph.
///
/// The graph is a plain mutable value: callers own it, the reducer borrows
/// it mutably, and nothing inside it is shared or locked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    vertices: BTreeMap<String, Vertex>,
}

impl DirectedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list, inserting every endpoint first.
    ///
    /// Duplicate edges collapse to one; self-loops are kept.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let edges: Vec<(S, S)> = edges.into_iter().collect();
        let mut graph = Self::new();
        for (from, to) in &edges {
            graph.add_vertex(from.as_ref());
            graph.add_vertex(to.as_ref());
        }
        for (from, to) in &edges {
            graph.add_edge(from.as_ref(), to.as_ref());
        }
        graph
    }

    /// Insert `key` with empty adjacency. Returns `false` if it already existed.
    pub fn add_vertex(&mut self, key: &str) -> bool {
        if self.vertices.contains_key(key) {
            return false;
        }
        self.vertices.insert(key.to_owned(), Vertex::default());
        true
    }

    /// Insert the edge `from → to`.
    ///
    /// Returns `false` without touching the graph when either endpoint is
    /// missing or the edge is already present.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        if !self.vertices.contains_key(to) {
            return false;
        }
        let Some(source) = self.vertices.get_mut(from) else {
            return false;
        };
        if !source.outgoing.insert(to.to_owned()) {
            return false;
        }
        if let Some(target) = self.vertices.get_mut(to) {
            target.incoming.insert(from.to_owned());
        }

        debug_assert!(self.has_edge(from, to));
        true
    }

    /// Remove `key` and every reference to it. Returns `false` if absent.
    ///
    /// Only the deleted vertex's own neighbours are visited, so the cost is
    /// proportional to its degree rather than to the graph size.
    pub fn delete_vertex(&mut self, key: &str) -> bool {
        let Some(vertex) = self.vertices.remove(key) else {
            return false;
        };

        for target in &vertex.outgoing {
            if let Some(neighbour) = self.vertices.get_mut(target) {
                neighbour.incoming.remove(key);
            }
        }
        for source in &vertex.incoming {
            if let Some(neighbour) = self.vertices.get_mut(source) {
                neighbour.outgoing.remove(key);
            }
        }

        debug_assert!(
            vertex
                .outgoing
                .iter()
                .chain(&vertex.incoming)
                .filter_map(|n| self.vertices.get(n))
                .all(|n| !n.incoming.contains(key) && !n.outgoing.contains(key)),
            "neighbours of deleted vertex {key} still reference it"
        );
        true
    }

    /// Keys of every vertex with no incoming edge, as of now.
    #[must_use]
    pub fn zero_in_degree(&self) -> BTreeSet<String> {
        self.vertices
            .iter()
            .filter(|(_, vertex)| vertex.incoming.is_empty())
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Number of live vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vertices.contains_key(key)
    }

    #[must_use]
    pub fn vertex(&self, key: &str) -> Option<&Vertex> {
        self.vertices.get(key)
    }

    /// Out-degree of `key`; zero for unknown keys.
    #[must_use]
    pub fn out_degree(&self, key: &str) -> usize {
        self.vertices.get(key).map_or(0, Vertex::out_degree)
    }

    /// In-degree of `key`; zero for unknown keys.
    #[must_use]
    pub fn in_degree(&self, key: &str) -> usize {
        self.vertices.get(key).map_or(0, Vertex::in_degree)
    }

    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|vertex| vertex.outgoing.contains(to))
    }

    /// Vertex keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }

    /// `(key, vertex)` pairs in lexicographic key order.
    pub fn vertices(&self) -> impl Iterator<Item = (&str, &Vertex)> {
        self.vertices.iter().map(|(key, vertex)| (key.as_str(), vertex))
    }

    /// Every edge as `(from, to)`, sorted by `from` then `to`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vertices
            .iter()
            .flat_map(|(from, vertex)| vertex.outgoing().map(move |to| (from.as_str(), to)))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// Verify that adjacency is mirrored and free of dangling keys.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphInvariantError`] found, scanning vertices in
    /// key order.
    pub fn check_invariants(&self) -> Result<(), GraphInvariantError> {
        for (key, vertex) in &self.vertices {
            for to in &vertex.outgoing {
                let Some(target) = self.vertices.get(to) else {
                    return Err(GraphInvariantError::DanglingReference {
                        vertex: key.clone(),
                        missing: to.clone(),
                    });
                };
                if !target.incoming.contains(key) {
                    return Err(GraphInvariantError::MissingIncoming {
                        from: key.clone(),
                        to: to.clone(),
                    });
                }
            }
            for from in &vertex.incoming {
                let Some(source) = self.vertices.get(from) else {
                    return Err(GraphInvariantError::DanglingReference {
                        vertex: key.clone(),
                        missing: from.clone(),
                    });
                };
                if !source.outgoing.contains(key) {
                    return Err(GraphInvariantError::MissingOutgoing {
                        from: from.clone(),
                        to: key.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn empty_graph_has_no_vertices() {
        let graph = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.zero_in_degree().is_empty());
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = DirectedGraph::new();
        assert!(graph.add_vertex("apple"));
        graph.add_edge("apple", "apple");
        let before = graph.clone();

        assert!(!graph.add_vertex("apple"));
        assert_eq!(graph, before);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex("Word");
        graph.add_vertex("word");
        assert_eq!(graph.len(), 2);
        assert!(graph.contains("Word"));
        assert!(!graph.contains("WORD"));
    }

    #[test]
    fn add_edge_mirrors_adjacency() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        assert!(graph.add_edge("a", "b"));

        let a = graph.vertex("a").expect("a exists");
        let b = graph.vertex("b").expect("b exists");
        assert_eq!(a.outgoing().collect::<Vec<_>>(), ["b"]);
        assert_eq!(b.incoming().collect::<Vec<_>>(), ["a"]);
        assert_eq!(a.in_degree(), 0);
        assert_eq!(b.out_degree(), 0);
        assert!(graph.check_invariants().is_ok());
    }

    #[test]
    fn duplicate_edge_is_ignored() {
        let mut graph = DirectedGraph::from_edges([("a", "b")]);
        assert!(!graph.add_edge("a", "b"));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.in_degree("b"), 1);
    }

    #[test]
    fn edge_to_missing_endpoint_is_ignored() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex("a");
        assert!(!graph.add_edge("a", "ghost"));
        assert!(!graph.add_edge("ghost", "a"));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.len(), 1);
        assert!(!graph.contains("ghost"));
    }

    #[test]
    fn self_loop_counts_both_ways() {
        let graph = DirectedGraph::from_edges([("loop", "loop")]);
        assert_eq!(graph.out_degree("loop"), 1);
        assert_eq!(graph.in_degree("loop"), 1);
        assert!(graph.zero_in_degree().is_empty());
        assert!(graph.check_invariants().is_ok());
    }

    #[test]
    fn delete_vertex_removes_all_references() {
        let mut graph = DirectedGraph::from_edges([("a", "b"), ("b", "c"), ("c", "b"), ("d", "b")]);
        assert!(graph.delete_vertex("b"));

        assert_eq!(graph.len(), 3);
        for (_, vertex) in graph.vertices() {
            assert!(vertex.outgoing().all(|k| k != "b"));
            assert!(vertex.incoming().all(|k| k != "b"));
        }
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.check_invariants().is_ok());
    }

    #[test]
    fn delete_self_looped_vertex() {
        let mut graph = DirectedGraph::from_edges([("x", "x"), ("x", "y")]);
        assert!(graph.delete_vertex("x"));
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.in_degree("y"), 0);
        assert!(graph.check_invariants().is_ok());
    }

    #[test]
    fn delete_missing_vertex_is_noop() {
        let mut graph = DirectedGraph::from_edges([("a", "b")]);
        let before = graph.clone();
        assert!(!graph.delete_vertex("zzz"));
        assert_eq!(graph, before);
    }

    #[test]
    fn zero_in_degree_is_sorted_snapshot() {
        let graph = DirectedGraph::from_edges([("m", "a"), ("b", "a"), ("z", "z")]);
        assert_eq!(keys(&graph.zero_in_degree()), ["b", "m"]);
        assert_eq!(graph.len(), 4);
    }

    #[test]
    fn degree_of_unknown_key_is_zero() {
        let graph = DirectedGraph::from_edges([("a", "b")]);
        assert_eq!(graph.out_degree("nope"), 0);
        assert_eq!(graph.in_degree("nope"), 0);
        assert!(!graph.has_edge("nope", "a"));
    }

    #[test]
    fn edges_are_sorted() {
        let graph = DirectedGraph::from_edges([("b", "a"), ("a", "c"), ("a", "b")]);
        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, [("a", "b"), ("a", "c"), ("b", "a")]);
    }

    #[test]
    fn check_invariants_reports_dangling_reference() {
        let mut graph = DirectedGraph::from_edges([("a", "b")]);
        // Simulate corruption by dropping `b` without the cascade.
        graph.vertices.remove("b");
        assert_eq!(
            graph.check_invariants(),
            Err(GraphInvariantError::DanglingReference {
                vertex: "a".to_string(),
                missing: "b".to_string(),
            })
        );
    }

    #[test]
    fn check_invariants_reports_unmirrored_edge() {
        let mut graph = DirectedGraph::from_edges([("a", "b")]);
        if let Some(b) = graph.vertices.get_mut("b") {
            b.incoming.clear();
        }
        assert_eq!(
            graph.check_invariants(),
            Err(GraphInvariantError::MissingIncoming {
                from: "a".to_string(),
                to: "b".to_string(),
            })
        );

        let mut graph = DirectedGraph::from_edges([("a", "b")]);
        if let Some(a) = graph.vertices.get_mut("a") {
            a.outgoing.clear();
        }
        assert_eq!(
            graph.check_invariants(),
            Err(GraphInvariantError::MissingOutgoing {
                from: "a".to_string(),
                to: "b".to_string(),
            })
        );
    }
}
