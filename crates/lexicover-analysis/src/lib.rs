#![forbid(unsafe_code)]
//! lexicover-analysis library.
//!
//! Cycle listing and summary statistics for definition graphs, computed on
//! a petgraph copy so the caller's graph is left untouched.
//!
//! # Conventions
//!
//! - **Errors**: Analyses are total; nothing here returns `Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod graph;
