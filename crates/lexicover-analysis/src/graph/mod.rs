//! Read-only graph analyses over a petgraph projection.
//!
//! # Overview
//!
//! The core [`lexicover_core::DirectedGraph`] is built for keyed deletion.
//! Analyses that need SCCs or connectivity copy it into a petgraph
//! `DiGraph` first and never mutate the source.
//!
//! ## Pipeline
//!
//! ```text
//! DirectedGraph
//!        ↓  build::RawGraph::from_directed()
//! RawGraph (DiGraph + key map + content hash)
//!        ├─ cycles::find_all_cycles()   cyclic SCCs
//!        ├─ cycles::cycle_closure()     words peeling cannot remove
//!        ↓  stats::GraphStats::from_raw()
//! GraphStats
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use lexicover_core::DirectedGraph;
//! use lexicover_analysis::graph::{RawGraph, GraphStats};
//!
//! let source = DirectedGraph::from_edges([("a", "b"), ("b", "a"), ("c", "a")]);
//! let raw = RawGraph::from_directed(&source);
//! let stats = GraphStats::from_raw(&raw);
//!
//! assert_eq!(stats.cycle_count, 1);
//! assert_eq!(stats.kernel_size, 2);
//! ```

pub mod build;
pub mod cycles;
pub mod stats;

pub use build::RawGraph;
pub use cycles::{cycle_closure, find_all_cycles};
pub use stats::GraphStats;
