//! `lexicover stats` — summary statistics of the definition graph.

use std::io::Write;
use std::path::Path;

use clap::Args;
use lexicover_analysis::graph::{GraphStats, RawGraph};

use crate::cmd::input::{InputArgs, load_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `lexicover stats`.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute `lexicover stats`.
pub fn run_stats(args: &StatsArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let loaded = load_graph(project_root, &args.input.overrides())?;
    let stats = GraphStats::from_raw(&RawGraph::from_directed(&loaded.graph));

    render_mode(output, &stats, render_stats_text, render_stats_pretty)
}

fn render_stats_text(stats: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "nodes {}", stats.node_count)?;
    writeln!(w, "edges {}", stats.edge_count)?;
    writeln!(w, "density {:.6}", stats.density)?;
    writeln!(w, "sccs {}", stats.scc_count)?;
    writeln!(w, "cycles {}", stats.cycle_count)?;
    writeln!(w, "components {}", stats.weakly_connected_component_count)?;
    writeln!(w, "isolated {}", stats.isolated_node_count)?;
    writeln!(w, "free {}", stats.free_node_count)?;
    writeln!(w, "max_in {}", stats.max_in_degree)?;
    writeln!(w, "max_out {}", stats.max_out_degree)?;
    writeln!(w, "kernel {}", stats.kernel_size)?;
    writeln!(w, "hash {}", stats.content_hash)
}

fn render_stats_pretty(stats: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Graph")?;
    pretty_kv(w, "Words", stats.node_count.to_string())?;
    pretty_kv(w, "Edges", stats.edge_count.to_string())?;
    pretty_kv(w, "Density", format!("{:.6}", stats.density))?;
    pretty_kv(w, "Free", stats.free_node_count.to_string())?;
    pretty_kv(w, "Isolated", stats.isolated_node_count.to_string())?;
    pretty_kv(
        w,
        "Max degree",
        format!("in {} / out {}", stats.max_in_degree, stats.max_out_degree),
    )?;
    writeln!(w)?;

    pretty_section(w, "Structure")?;
    pretty_kv(w, "SCCs", stats.scc_count.to_string())?;
    pretty_kv(w, "Cycles", stats.cycle_count.to_string())?;
    pretty_kv(w, "Components", stats.weakly_connected_component_count.to_string())?;
    pretty_kv(
        w,
        "Kernel",
        if stats.is_peelable() {
            "empty (peeling clears the graph)".to_string()
        } else {
            stats.kernel_size.to_string()
        },
    )?;
    pretty_kv(w, "Hash", &stats.content_hash)
}
