//! Peeling and greedy elimination over a [`DirectedGraph`].
//!
//! # Peeling
//!
//! A *free* vertex has no incoming edge: no other word uses it in a
//! definition. One peel pass deletes every vertex that is free at the start
//! of the pass. Vertices that only become free because of that pass's own
//! deletions wait for the next pass. Peeling to fixpoint leaves the
//! *kernel*: vertices that lie on a cycle or are reachable from one.
//!
//! # Greedy Elimination
//!
//! ```text
//! peel_all
//! while graph not empty:
//!     v = vertex with greatest out-degree (smallest key on ties)
//!     delete v, append v to the sequence
//!     peel_all
//! ```
//!
//! The sequence is an approximate directed feedback vertex set: deleting
//! it from the original graph leaves no cycle. It is not minimal.
//!
//! # Mutation
//!
//! [`GraphReducer`] borrows the caller's graph mutably and edits it in
//! place. After [`GraphReducer::reduce`] the graph is empty; build a new one
//! for the next computation.

#![allow(clippy::module_name_repetitions)]

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info, instrument, trace};

use crate::graph::DirectedGraph;

// ---------------------------------------------------------------------------
// Reduction
// ---------------------------------------------------------------------------

/// Outcome of a full greedy reduction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reduction {
    /// Keys deleted by the highest-out-degree step, in removal order.
    pub eliminated: Vec<String>,
    /// Vertex count when the reduction started.
    pub initial_size: usize,
    /// Vertices removed by peeling (never part of `eliminated`).
    pub peeled: usize,
    /// Peel passes that removed at least one vertex.
    pub peel_passes: usize,
}

impl Reduction {
    /// Number of greedy rounds, one per eliminated vertex.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.eliminated.len()
    }
}

/// Totals for one call to [`GraphReducer::peel_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PeelOutcome {
    removed: usize,
    passes: usize,
}

// ---------------------------------------------------------------------------
// GraphReducer
// ---------------------------------------------------------------------------

/// Derived computations over a mutably borrowed graph.
#[derive(Debug)]
pub struct GraphReducer<'g> {
    graph: &'g mut DirectedGraph,
}

impl<'g> GraphReducer<'g> {
    #[must_use]
    pub const fn new(graph: &'g mut DirectedGraph) -> Self {
        Self { graph }
    }

    /// Read access to the graph in its current state.
    #[must_use]
    pub const fn graph(&self) -> &DirectedGraph {
        self.graph
    }

    /// Snapshot of the free vertices. Does not mutate the graph.
    #[must_use]
    pub fn free_vertices(&self) -> BTreeSet<String> {
        self.graph.zero_in_degree()
    }

    /// Delete every vertex free at the start of the pass; return how many.
    pub fn peel_once(&mut self) -> usize {
        let free = self.graph.zero_in_degree();
        for key in &free {
            self.graph.delete_vertex(key);
        }
        trace!(removed = free.len(), remaining = self.graph.len(), "peel pass");
        free.len()
    }

    /// Peel until no vertex is free; return the total removed.
    pub fn peel_all(&mut self) -> usize {
        self.peel_to_fixpoint().removed
    }

    /// Greedy elimination sequence. Leaves the graph empty.
    pub fn reduce(&mut self) -> Vec<String> {
        self.reduce_with_report().eliminated
    }

    /// Greedy elimination with peel statistics. Leaves the graph empty.
    #[instrument(skip(self), fields(vertices = self.graph.len()))]
    pub fn reduce_with_report(&mut self) -> Reduction {
        let mut report = Reduction {
            initial_size: self.graph.len(),
            ..Reduction::default()
        };

        let first = self.peel_to_fixpoint();
        report.peeled += first.removed;
        report.peel_passes += first.passes;
        debug!(
            peeled = first.removed,
            kernel = self.graph.len(),
            "initial peel reached fixpoint"
        );

        while let Some(key) = self.highest_out_degree() {
            let out_degree = self.graph.out_degree(&key);
            self.graph.delete_vertex(&key);

            let outcome = self.peel_to_fixpoint();
            report.peeled += outcome.removed;
            report.peel_passes += outcome.passes;
            debug!(
                round = report.eliminated.len() + 1,
                vertex = %key,
                out_degree,
                peeled = outcome.removed,
                remaining = self.graph.len(),
                "eliminated vertex"
            );
            report.eliminated.push(key);
        }

        info!(
            eliminated = report.eliminated.len(),
            peeled = report.peeled,
            peel_passes = report.peel_passes,
            "reduction complete"
        );
        report
    }

    fn peel_to_fixpoint(&mut self) -> PeelOutcome {
        let mut outcome = PeelOutcome::default();
        loop {
            let removed = self.peel_once();
            if removed == 0 {
                return outcome;
            }
            outcome.removed += removed;
            outcome.passes += 1;
        }
    }

    /// Key with the greatest out-degree; the smallest key wins ties.
    ///
    /// Returns `None` only for an empty graph.
    fn highest_out_degree(&self) -> Option<String> {
        let mut best: Option<(&str, usize)> = None;
        for (key, vertex) in self.graph.vertices() {
            let degree = vertex.out_degree();
            if best.is_none_or(|(_, top)| degree > top) {
                best = Some((key, degree));
            }
        }
        best.map(|(key, _)| key.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
