//! Dictionary selection flags shared by every subcommand.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Args;
use lexicover_core::config::{ConfigOverrides, ProjectConfig, resolve_config};
use lexicover_core::{Dictionary, DirectedGraph, LoadSummary};
use tracing::{info, instrument};

/// Where to read the dictionary from.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Directory holding the dictionary files (default: wrangle/cleaned).
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Dictionary file to load, relative to the data directory. Repeatable.
    /// Defaults to A.json through Z.json.
    #[arg(long = "file", value_name = "NAME")]
    pub files: Vec<String>,
}

impl InputArgs {
    /// Overrides carrying only the input selection.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_dir: self.data_dir.clone(),
            files: self.files.clone(),
            ..ConfigOverrides::default()
        }
    }
}

/// A dictionary loaded and turned into a graph.
#[derive(Debug)]
pub struct LoadedGraph {
    pub config: ProjectConfig,
    pub summary: LoadSummary,
    pub graph: DirectedGraph,
}

/// Resolve configuration, load the dictionary, and build the graph.
#[instrument(skip_all, fields(root = %project_root.display()))]
pub fn load_graph(project_root: &Path, overrides: &ConfigOverrides) -> anyhow::Result<LoadedGraph> {
    let config = resolve_config(project_root, overrides)?;

    let mut dictionary = Dictionary::new();
    let summary = dictionary
        .load_dir(&config.input.dir, &config.input.files)
        .with_context(|| format!("failed to load dictionary from {}", config.input.dir.display()))?;

    let graph = dictionary.to_graph();
    info!(
        files = summary.files_loaded,
        definitions = summary.definitions,
        vertices = graph.len(),
        edges = graph.edge_count(),
        "built definition graph"
    );

    Ok(LoadedGraph {
        config,
        summary,
        graph,
    })
}
