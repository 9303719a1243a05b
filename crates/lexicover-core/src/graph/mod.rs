//! Definition graph.
//!
//! # Overview
//!
//! A word points at the words used to define it. The resulting directed
//! graph is the input to every computation in [`crate::reduce`].
//!
//! ## Pipeline
//!
//! ```text
//! dictionary files
//!        ↓  dictionary::Dictionary::load_dir()
//! Dictionary (name, words) pairs
//!        ↓  Dictionary::populate()   (all vertices first, then all edges)
//! DirectedGraph
//!        ↓  reduce::GraphReducer
//! free words + greedy elimination sequence
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use lexicover_core::graph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_vertex("cat");
//! graph.add_vertex("animal");
//! graph.add_edge("cat", "animal");
//!
//! assert_eq!(graph.out_degree("cat"), 1);
//! assert!(graph.zero_in_degree().contains("cat"));
//! ```

pub mod directed;

pub use directed::{DirectedGraph, GraphInvariantError, Vertex};
