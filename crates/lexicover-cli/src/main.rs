#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "lexicover: free words and cycle-breaking words of a dictionary",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (alias for `--format json`).
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Project root holding lexicover.toml and the relative data paths.
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }

    fn project_root(&self) -> anyhow::Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(env::current_dir()?),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Write free words and the elimination sequence",
        long_about = "Load the dictionary, write the words no definition uses, then greedily \
                      eliminate words until no definition cycle remains and write the \
                      elimination sequence.",
        after_help = "EXAMPLES:\n    # Use wrangle/cleaned/A.json..Z.json under the current directory\n    lexicover run\n\n    # Custom data and outputs\n    lexicover run --data-dir dict --free-out out/free.json --eliminated-out out/del.json\n\n    # Emit machine-readable output\n    lexicover run --json"
    )]
    Run(cmd::run::RunArgs),

    #[command(
        about = "List words no definition uses",
        after_help = "EXAMPLES:\n    # Print free words, one per line\n    lexicover free --format text\n\n    # Write them to a file\n    lexicover free --out freeWords.json"
    )]
    Free(cmd::free::FreeArgs),

    #[command(
        about = "Compute the greedy elimination sequence",
        long_about = "Peel free words, then repeatedly remove the word with the most \
                      definition words until the graph is empty. The removed words, in \
                      order, break every definition cycle.",
        after_help = "EXAMPLES:\n    # Print the sequence\n    lexicover reduce\n\n    # Load only two files\n    lexicover reduce --file A.json --file B.json"
    )]
    Reduce(cmd::reduce::ReduceArgs),

    #[command(
        about = "Show graph statistics",
        after_help = "EXAMPLES:\n    lexicover stats\n    lexicover stats --format json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        about = "List definition cycles left after peeling",
        after_help = "EXAMPLES:\n    lexicover cycles\n    lexicover cycles --json"
    )]
    Cycles(cmd::cycles::CyclesArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("LEXICOVER_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "lexicover=debug,info"
        } else {
            "lexicover=info,warn"
        })
    });

    let format = env::var("LEXICOVER_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn dispatch(cli: &Cli, output: OutputMode) -> anyhow::Result<()> {
    let project_root = cli.project_root()?;
    debug!(root = %project_root.display(), ?output, "dispatching");

    match &cli.command {
        Commands::Run(args) => cmd::run::run_run(args, output, &project_root),
        Commands::Free(args) => cmd::free::run_free(args, output, &project_root),
        Commands::Reduce(args) => cmd::reduce::run_reduce(args, output, &project_root),
        Commands::Stats(args) => cmd::stats::run_stats(args, output, &project_root),
        Commands::Cycles(args) => cmd::cycles::run_cycles(args, output, &project_root),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli.output_mode();
    match dispatch(&cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(render_err) = render_error(output, &CliError::from(&err)) {
                eprintln!("error: {err:#} (and failed to render it: {render_err})");
            }
            ExitCode::FAILURE
        }
    }
}
