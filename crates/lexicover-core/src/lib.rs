#![forbid(unsafe_code)]
//! lexicover-core library.
//!
//! Builds the definition graph (a word points at the words that define it)
//! and derives the free words and the greedy elimination sequence.
//!
//! # Conventions
//!
//! - **Errors**: Typed `thiserror` enums for I/O-facing modules; `anyhow::Result`
//!   for configuration. The graph and reducer never fail.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod dictionary;
pub mod export;
pub mod graph;
pub mod reduce;

pub use dictionary::{Definition, Dictionary, DictionaryError, LoadSummary};
pub use graph::{DirectedGraph, GraphInvariantError};
pub use reduce::{GraphReducer, Reduction};
