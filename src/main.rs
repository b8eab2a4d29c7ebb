//! lgraphs - reads a labelled, weighted, undirected graph and reports its structure.
//!
//! # Examples
//!
//! ```bash
//! # Report everything about a graph file
//! lgraphs graph.txt
//!
//! # Only the cut vertices and cut edges of a graph read from stdin
//! lgraphs --query cut-vertices --query cut-edges < graph.txt
//!
//! # Trace every parsed line
//! RUST_LOG=lgraphs=trace lgraphs graph.txt
//! ```

use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use lgraphs::{
    Result,
    io::{GraphReader, Query, Report, TextReader},
    prelude::*,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Structural analysis of labelled, weighted, undirected graphs
#[derive(Parser)]
#[command(name = "lgraphs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph file in the text format (default: stdin)
    file: Option<PathBuf>,

    /// Queries to answer (name, vertices, edges, bipartite, components, diameters,
    /// cut-vertices, cut-edges); all of them if omitted
    #[arg(short = 'Q', long = "query")]
    queries: Vec<Query>,

    /// Lines starting with this prefix are skipped
    #[arg(long, default_value = "//")]
    comment_prefix: String,

    /// Weight of edges declared without weight
    #[arg(long, default_value_t = DEFAULT_WEIGHT)]
    default_weight: Weight,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn read_graph(cli: &Cli) -> Result<LabelledGraph> {
    let reader = TextReader::new()
        .comment_prefix(cli.comment_prefix.as_str())
        .default_weight(cli.default_weight);

    match &cli.file {
        Some(path) => {
            info!(path = %path.display(), "reading graph");
            reader.try_read_graph_file(path)
        }
        None => {
            info!("reading graph from stdin");
            reader.try_read_graph(io::stdin().lock())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let graph = match read_graph(&cli) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = Report::compute(&graph);
    let queries = if cli.queries.is_empty() {
        Query::ALL.to_vec()
    } else {
        cli.queries
    };

    let mut out = String::new();
    if report.write_queries(&mut out, &queries).is_err() {
        return ExitCode::FAILURE;
    }
    print!("{out}");

    ExitCode::SUCCESS
}
