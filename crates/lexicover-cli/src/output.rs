//! Shared output layer for pretty/text/JSON parity across all commands.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` flag
//! 2. hidden `--json` flag
//! 3. `FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 4. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.

use clap::ValueEnum;
use lexicover_core::DictionaryError;
use lexicover_core::export::ExportError;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 48;

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<14} {}", format!("{key}:"), value.as_ref())
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized output (sections, visual framing).
    Pretty,
    /// Plain text for scripts and pipes.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Core resolution logic, separated from I/O for testability.
fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }

    if json_flag {
        return OutputMode::Json;
    }

    if let Some(val) = format_env {
        match val.to_lowercase().as_str() {
            "json" => return OutputMode::Json,
            "text" => return OutputMode::Text,
            "pretty" => return OutputMode::Pretty,
            _ => {} // unknown value, fall through to TTY detection
        }
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from CLI flags, environment, and TTY defaults.
pub fn resolve_output_mode(format_flag: Option<OutputMode>, json_flag: bool) -> OutputMode {
    let env_val = std::env::var("FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(format_flag, json_flag, env_val.as_deref(), is_tty)
}

/// Render a serializable value with explicit text and pretty renderers.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text_fn(value, &mut out)?,
        OutputMode::Pretty => pretty_fn(value, &mut out)?,
    }
    Ok(())
}

/// A structured error with optional suggestion and error code.
#[derive(Debug, Serialize)]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Machine-readable error code (e.g. "dictionary_parse").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    /// Create a simple error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            error_code: None,
        }
    }

    /// Create an error with a suggestion and error code.
    pub fn with_details(
        message: impl Into<String>,
        suggestion: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            suggestion: Some(suggestion.into()),
            error_code: Some(error_code.into()),
        }
    }
}

impl From<&anyhow::Error> for CliError {
    fn from(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");

        if let Some(dict_err) = err.downcast_ref::<DictionaryError>() {
            return match dict_err {
                DictionaryError::Parse { path, .. } => Self::with_details(
                    message,
                    format!(
                        "{} must be a JSON object mapping each word to an array of words",
                        path.display()
                    ),
                    "dictionary_parse",
                ),
                DictionaryError::Io { path, .. } => Self::with_details(
                    message,
                    format!("check that {} is readable", path.display()),
                    "dictionary_io",
                ),
            };
        }

        if let Some(export_err) = err.downcast_ref::<ExportError>() {
            return Self::with_details(
                message,
                "check that the output directory is writable",
                match export_err {
                    ExportError::Io { .. } => "output_io",
                    ExportError::Serialize { .. } => "output_serialize",
                },
            );
        }

        Self::new(message)
    }
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    write_error(mode, error, &mut out)?;
    Ok(())
}

fn write_error(mode: OutputMode, error: &CliError, out: &mut dyn Write) -> anyhow::Result<()> {
    if mode.is_json() {
        let wrapper = serde_json::json!({
            "error": error,
        });
        serde_json::to_writer_pretty(&mut *out, &wrapper)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "error: {}", error.message)?;
    if let Some(ref suggestion) = error.suggestion {
        writeln!(out, "  suggestion: {suggestion}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn format_flag_wins_over_everything() {
        let mode = resolve_output_mode_inner(Some(OutputMode::Text), true, Some("json"), true);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn json_flag_wins_over_env() {
        let mode = resolve_output_mode_inner(None, true, Some("pretty"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn env_is_case_insensitive() {
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("JSON"), true),
            OutputMode::Json
        );
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("Text"), true),
            OutputMode::Text
        );
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("pretty"), false),
            OutputMode::Pretty
        );
    }

    #[test]
    fn unknown_env_falls_back_to_tty_detection() {
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("yaml"), true),
            OutputMode::Pretty
        );
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("yaml"), false),
            OutputMode::Text
        );
    }

    #[test]
    fn default_depends_on_tty() {
        assert_eq!(resolve_output_mode_inner(None, false, None, true), OutputMode::Pretty);
        assert_eq!(resolve_output_mode_inner(None, false, None, false), OutputMode::Text);
    }

    #[test]
    fn parse_error_maps_to_dictionary_code() {
        let source = serde_json::from_str::<Vec<String>>("{").expect_err("invalid json");
        let err = anyhow::Error::new(DictionaryError::Parse {
            path: PathBuf::from("wrangle/cleaned/A.json"),
            source,
        });

        let cli = CliError::from(&err);
        assert_eq!(cli.error_code.as_deref(), Some("dictionary_parse"));
        assert!(cli.message.contains("A.json"));
        assert!(
            cli.suggestion
                .as_deref()
                .is_some_and(|s| s.contains("wrangle/cleaned/A.json"))
        );
    }

    #[test]
    fn generic_error_has_no_code() {
        let err = anyhow::anyhow!("boom").context("while loading");
        let cli = CliError::from(&err);
        assert_eq!(cli.message, "while loading: boom");
        assert!(cli.error_code.is_none());
        assert!(cli.suggestion.is_none());
    }

    #[test]
    fn error_renders_as_json_object() {
        let err = CliError::with_details("bad", "fix it", "code");
        let mut out = Vec::new();
        write_error(OutputMode::Json, &err, &mut out).expect("render");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(value["error"]["message"], "bad");
        assert_eq!(value["error"]["error_code"], "code");
    }

    #[test]
    fn error_renders_with_suggestion_in_text() {
        let err = CliError::with_details("bad", "fix it", "code");
        let mut out = Vec::new();
        write_error(OutputMode::Text, &err, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert_eq!(rendered, "error: bad\n  suggestion: fix it\n");
    }
}
