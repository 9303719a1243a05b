//! `lexicover reduce` — greedy elimination sequence.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use lexicover_core::export::write_word_list;
use lexicover_core::{GraphReducer, Reduction};
use serde::Serialize;

use crate::cmd::input::{InputArgs, load_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `lexicover reduce`.
#[derive(Args, Debug, Default)]
pub struct ReduceArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the sequence to this file instead of printing it.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ReduceOutput {
    #[serde(flatten)]
    report: Reduction,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
}

/// Execute `lexicover reduce`.
pub fn run_reduce(args: &ReduceArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let mut loaded = load_graph(project_root, &args.input.overrides())?;
    let report = GraphReducer::new(&mut loaded.graph).reduce_with_report();

    let path = match &args.out {
        Some(out) => {
            let path = project_root.join(out);
            write_word_list(&path, &report.eliminated)?;
            Some(path)
        }
        None => None,
    };

    let payload = ReduceOutput { report, path };
    render_mode(output, &payload, render_reduce_text, render_reduce_pretty)
}

fn render_reduce_text(payload: &ReduceOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if let Some(path) = &payload.path {
        return writeln!(w, "{}  {}", payload.report.eliminated.len(), path.display());
    }
    for word in &payload.report.eliminated {
        writeln!(w, "{word}")?;
    }
    Ok(())
}

fn render_reduce_pretty(payload: &ReduceOutput, w: &mut dyn Write) -> std::io::Result<()> {
    let report = &payload.report;

    pretty_section(w, "Reduction")?;
    pretty_kv(w, "Vertices", report.initial_size.to_string())?;
    pretty_kv(
        w,
        "Peeled",
        format!("{} in {} passes", report.peeled, report.peel_passes),
    )?;
    pretty_kv(w, "Eliminated", report.rounds().to_string())?;

    if let Some(path) = &payload.path {
        pretty_kv(w, "Written to", path.display().to_string())?;
        return Ok(());
    }

    if !report.eliminated.is_empty() {
        writeln!(w)?;
        for (idx, word) in report.eliminated.iter().enumerate() {
            writeln!(w, "{:>4}. {word}", idx + 1)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(path: Option<&str>) -> ReduceOutput {
        ReduceOutput {
            report: Reduction {
                eliminated: vec!["living".to_string(), "object".to_string()],
                initial_size: 9,
                peeled: 7,
                peel_passes: 4,
            },
            path: path.map(PathBuf::from),
        }
    }

    #[test]
    fn reduce_args_parse_no_flags() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: ReduceArgs,
        }

        let parsed = Wrapper::parse_from(["test"]);
        assert!(parsed.args.out.is_none());
    }

    #[test]
    fn render_reduce_text_in_removal_order() {
        let mut out = Vec::new();
        render_reduce_text(&sample(None), &mut out).expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), "living\nobject\n");
    }

    #[test]
    fn render_reduce_pretty_numbers_sequence() {
        let mut out = Vec::new();
        render_reduce_pretty(&sample(None), &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("7 in 4 passes"));
        assert!(rendered.contains("   1. living"));
        assert!(rendered.contains("   2. object"));
    }

    #[test]
    fn json_payload_flattens_report() {
        let value = serde_json::to_value(sample(Some("d.json"))).expect("json");
        assert_eq!(value["initial_size"], 9);
        assert_eq!(value["eliminated"][0], "living");
        assert_eq!(value["path"], "d.json");
    }
}
