//! `lexicover cycles` — definition cycles left after peeling.

use std::io::Write;
use std::path::Path;

use clap::Args;
use lexicover_analysis::graph::{RawGraph, find_all_cycles};
use lexicover_core::GraphReducer;
use serde::Serialize;

use crate::cmd::input::{InputArgs, load_graph};
use crate::output::{OutputMode, render_mode};

/// Arguments for `lexicover cycles`.
#[derive(Args, Debug, Default)]
pub struct CyclesArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Serialize)]
struct CyclesOutput {
    peeled: usize,
    kernel_size: usize,
    cycles: Vec<Vec<String>>,
}

/// Execute `lexicover cycles`.
pub fn run_cycles(args: &CyclesArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let mut loaded = load_graph(project_root, &args.input.overrides())?;
    let peeled = GraphReducer::new(&mut loaded.graph).peel_all();

    let raw = RawGraph::from_directed(&loaded.graph);
    let payload = CyclesOutput {
        peeled,
        kernel_size: raw.node_count(),
        cycles: find_all_cycles(&raw.graph),
    };

    render_mode(output, &payload, render_cycles_text, render_cycles_human)
}

fn render_cycles_text(payload: &CyclesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for cycle in &payload.cycles {
        writeln!(w, "{}", cycle.join(" "))?;
    }
    Ok(())
}

fn render_cycles_human(payload: &CyclesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.cycles.is_empty() {
        writeln!(w, "No definition cycles found.")?;
        return Ok(());
    }

    writeln!(
        w,
        "Definition cycles ({}) in a kernel of {} words",
        payload.cycles.len(),
        payload.kernel_size
    )?;

    for (idx, cycle) in payload.cycles.iter().enumerate() {
        writeln!(w, "\nCycle {} ({} words):", idx + 1, cycle.len())?;
        for word in cycle {
            writeln!(w, "  - {word}")?;
        }
    }

    Ok(())
}
