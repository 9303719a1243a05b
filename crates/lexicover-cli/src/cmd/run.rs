//! `lexicover run` — the full pipeline: free words, then greedy elimination.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use lexicover_core::GraphReducer;
use lexicover_core::export::write_word_list;
use serde::Serialize;
use tracing::info;

use crate::cmd::input::{InputArgs, load_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `lexicover run`.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Where to write the free words (default: freeWords.json).
    #[arg(long, value_name = "PATH")]
    pub free_out: Option<PathBuf>,

    /// Where to write the elimination sequence (default: delNodes.json).
    #[arg(long, value_name = "PATH")]
    pub eliminated_out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RunOutput {
    files_loaded: usize,
    missing_files: usize,
    definitions: usize,
    vertices: usize,
    edges: usize,
    free_words: usize,
    free_words_path: PathBuf,
    eliminated: usize,
    eliminated_path: PathBuf,
    peeled: usize,
    peel_passes: usize,
}

/// Execute `lexicover run`.
pub fn run_run(args: &RunArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let mut overrides = args.input.overrides();
    overrides.free_words.clone_from(&args.free_out);
    overrides.eliminated.clone_from(&args.eliminated_out);

    let mut loaded = load_graph(project_root, &overrides)?;
    let vertices = loaded.graph.len();
    let edges = loaded.graph.edge_count();

    let free: Vec<String> = loaded.graph.zero_in_degree().into_iter().collect();
    write_word_list(&loaded.config.output.free_words, &free)?;
    info!(
        count = free.len(),
        path = %loaded.config.output.free_words.display(),
        "wrote free words"
    );

    let report = GraphReducer::new(&mut loaded.graph).reduce_with_report();
    write_word_list(&loaded.config.output.eliminated, &report.eliminated)?;
    info!(
        count = report.eliminated.len(),
        path = %loaded.config.output.eliminated.display(),
        "wrote elimination sequence"
    );

    let payload = RunOutput {
        files_loaded: loaded.summary.files_loaded,
        missing_files: loaded.summary.missing.len(),
        definitions: loaded.summary.definitions,
        vertices,
        edges,
        free_words: free.len(),
        free_words_path: loaded.config.output.free_words,
        eliminated: report.eliminated.len(),
        eliminated_path: loaded.config.output.eliminated,
        peeled: report.peeled,
        peel_passes: report.peel_passes,
    };

    render_mode(output, &payload, render_run_text, render_run_pretty)
}

fn render_run_text(payload: &RunOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "definitions {}  vertices {}  edges {}",
        payload.definitions, payload.vertices, payload.edges
    )?;
    writeln!(
        w,
        "free {}  {}",
        payload.free_words,
        payload.free_words_path.display()
    )?;
    writeln!(
        w,
        "eliminated {}  {}",
        payload.eliminated,
        payload.eliminated_path.display()
    )?;
    writeln!(w, "peeled {}", payload.peeled)
}

fn render_run_pretty(payload: &RunOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Dictionary")?;
    pretty_kv(
        w,
        "Files",
        format!(
            "{} loaded, {} missing",
            payload.files_loaded, payload.missing_files
        ),
    )?;
    pretty_kv(w, "Definitions", payload.definitions.to_string())?;
    pretty_kv(w, "Vertices", payload.vertices.to_string())?;
    pretty_kv(w, "Edges", payload.edges.to_string())?;
    writeln!(w)?;

    pretty_section(w, "Reduction")?;
    pretty_kv(
        w,
        "Free words",
        format!("{} → {}", payload.free_words, payload.free_words_path.display()),
    )?;
    pretty_kv(
        w,
        "Eliminated",
        format!("{} → {}", payload.eliminated, payload.eliminated_path.display()),
    )?;
    pretty_kv(
        w,
        "Peeled",
        format!("{} in {} passes", payload.peeled, payload.peel_passes),
    )
}
