//! procmap CLI
//!
//! # Usage
//!
//! ```bash
//! # Mine a log and print the graph as JSON
//! cargo run --bin procmap --release -- build --input events.csv
//!
//! # Cytoscape elements for a browser viewer, skipping bad rows
//! cargo run --bin procmap -- build --input events.csv --permissive --format cytoscape -o graph.json
//!
//! # Graphviz
//! cargo run --bin procmap -- build --input events.csv --format dot | dot -Tsvg > graph.svg
//!
//! # Only the build report
//! cargo run --bin procmap -- summary --input events.csv
//! ```
//!
//! Logging goes to stderr; `RUST_LOG` overrides the default `info` filter.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use procmap_core::adapters::{to_cytoscape, to_dot_with, DotLabelMode};
use procmap_core::{
    BuildOutcome, GraphPipeline, LogSource, MiningConfig, RecordPolicy, SessionOrdering,
};

#[derive(Parser)]
#[command(name = "procmap")]
#[command(about = "Mine a directly-follows process graph from a CSV event log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph and write it out
    Build {
        #[command(flatten)]
        build: BuildArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// DOT edge labels
        #[arg(long, value_enum, default_value_t = DotLabels::Events)]
        dot_labels: DotLabels,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the graph and print only the build report
    Summary {
        #[command(flatten)]
        build: BuildArgs,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// CSV event log (header line, then case,timestamp,activity); `-` reads stdin
    #[arg(short, long)]
    input: PathBuf,

    /// YAML configuration file (version: 1)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip invalid records instead of aborting
    #[arg(long)]
    permissive: bool,

    /// Sort each session by timestamp before computing transitions
    #[arg(long)]
    sort_by_time: bool,

    /// Aggregate sessions across the rayon pool
    #[arg(long)]
    parallel: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Cytoscape,
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DotLabels {
    /// Transition counts
    #[value(alias = "count")]
    Events,
    /// Mean transition durations
    #[value(alias = "time")]
    Duration,
}

impl From<DotLabels> for DotLabelMode {
    fn from(labels: DotLabels) -> Self {
        match labels {
            DotLabels::Events => DotLabelMode::Events,
            DotLabels::Duration => DotLabelMode::Duration,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            build,
            format,
            dot_labels,
            output,
        } => {
            let outcome = run_build(&build)?;
            let rendered = render(&outcome, format, dot_labels.into())?;
            write_output(output, &rendered)?;
        }
        Commands::Summary { build } => {
            let outcome = run_build(&build)?;
            println!("{}", serde_json::to_string_pretty(&outcome.report)?);
        }
    }

    Ok(())
}

fn load_config(args: &BuildArgs) -> Result<MiningConfig> {
    let mut config = match &args.config {
        Some(path) => MiningConfig::from_yaml(&path.to_string_lossy())
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MiningConfig::default(),
    };
    if args.permissive {
        config = config.with_record_policy(RecordPolicy::Permissive);
    }
    if args.sort_by_time {
        config = config.with_session_ordering(SessionOrdering::Timestamp);
    }
    if args.parallel {
        config = config.with_parallel(true);
    }
    Ok(config)
}

fn run_build(args: &BuildArgs) -> Result<BuildOutcome> {
    let config = load_config(args)?;
    let source = if args.input.as_os_str() == "-" {
        LogSource::reader("stdin", io::stdin())
    } else {
        LogSource::path(&args.input)
    };
    let outcome = GraphPipeline::new(config)?
        .run(source)
        .with_context(|| format!("building graph from {}", args.input.display()))?;
    Ok(outcome)
}

fn render(outcome: &BuildOutcome, format: OutputFormat, mode: DotLabelMode) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&outcome.graph.sorted())?,
        OutputFormat::Cytoscape => {
            serde_json::to_string_pretty(&to_cytoscape(&outcome.graph.sorted()))?
        }
        OutputFormat::Dot => to_dot_with(&outcome.graph, mode),
    };
    Ok(rendered)
}

fn write_output(output: Option<PathBuf>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(&path, rendered).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "graph written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
