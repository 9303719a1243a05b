//! `lexicover free` — words that no definition uses.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use lexicover_core::GraphReducer;
use lexicover_core::export::write_word_list;
use serde::Serialize;

use crate::cmd::input::{InputArgs, load_graph};
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `lexicover free`.
#[derive(Args, Debug, Default)]
pub struct FreeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the list to this file instead of printing every word.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct FreeOutput {
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<String>>,
}

/// Execute `lexicover free`.
pub fn run_free(args: &FreeArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let mut loaded = load_graph(project_root, &args.input.overrides())?;
    let words: Vec<String> = GraphReducer::new(&mut loaded.graph)
        .free_vertices()
        .into_iter()
        .collect();

    let payload = match &args.out {
        Some(out) => {
            let path = project_root.join(out);
            write_word_list(&path, &words)?;
            FreeOutput {
                count: words.len(),
                path: Some(path),
                words: None,
            }
        }
        None => FreeOutput {
            count: words.len(),
            path: None,
            words: Some(words),
        },
    };

    render_mode(output, &payload, render_free_text, render_free_pretty)
}

fn render_free_text(payload: &FreeOutput, w: &mut dyn Write) -> std::io::Result<()> {
    match (&payload.words, &payload.path) {
        (Some(words), _) => {
            for word in words {
                writeln!(w, "{word}")?;
            }
            Ok(())
        }
        (None, Some(path)) => writeln!(w, "{}  {}", payload.count, path.display()),
        (None, None) => writeln!(w, "{}", payload.count),
    }
}

fn render_free_pretty(payload: &FreeOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if let Some(path) = &payload.path {
        return writeln!(w, "Wrote {} free words to {}", payload.count, path.display());
    }

    if payload.count == 0 {
        return writeln!(w, "No free words.");
    }

    pretty_section(w, &format!("Free words ({})", payload.count))?;
    for word in payload.words.iter().flatten() {
        writeln!(w, "  {word}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(words: &[&str]) -> FreeOutput {
        FreeOutput {
            count: words.len(),
            path: None,
            words: Some(words.iter().map(ToString::to_string).collect()),
        }
    }

    #[test]
    fn free_args_parse_out() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: FreeArgs,
        }

        let parsed = Wrapper::parse_from(["test", "--out", "free.json"]);
        assert_eq!(parsed.args.out, Some(PathBuf::from("free.json")));
    }

    #[test]
    fn render_free_text_one_word_per_line() {
        let mut out = Vec::new();
        render_free_text(&listed(&["animal", "apple"]), &mut out).expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), "animal\napple\n");
    }

    #[test]
    fn render_free_pretty_empty() {
        let mut out = Vec::new();
        render_free_pretty(&listed(&[]), &mut out).expect("render");
        assert!(String::from_utf8(out).expect("utf8").contains("No free words."));
    }

    #[test]
    fn render_free_pretty_written() {
        let payload = FreeOutput {
            count: 3,
            path: Some(PathBuf::from("out/free.json")),
            words: None,
        };
        let mut out = Vec::new();
        render_free_pretty(&payload, &mut out).expect("render");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Wrote 3 free words to out/free.json\n"
        );
    }

    #[test]
    fn written_payload_omits_words_in_json() {
        let payload = FreeOutput {
            count: 3,
            path: Some(PathBuf::from("f.json")),
            words: None,
        };
        let value = serde_json::to_value(&payload).expect("json");
        assert_eq!(value["count"], 3);
        assert!(value.get("words").is_none());
    }
}
