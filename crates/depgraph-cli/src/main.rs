//! depgraph CLI
//!
//! Reads a generated blueprint HTML page, extracts the theorem/definition
//! dependency graph from its `renderDot` payload and modal containers, and
//! writes the validated graph as JSON.

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use depgraph_graph::{
    extract_with_options, DependencyGraph, ExtractError, ExtractOptions, Extraction,
    ExtractionReport, StructuralError,
};
use depgraph_ingest_html::{load_document, DocumentOptions};

mod analyze;

/// Environment variable holding the `tracing` filter directives.
const LOG_ENV: &str = "DEPGRAPH_LOG";

/// How many modal container ids to echo as a sample.
const SAMPLE_IDS: usize = 3;

#[derive(Parser)]
#[command(name = "depgraph")]
#[command(
    author,
    version,
    about = "Extract the dependency graph of a blueprint document into structured JSON"
)]
struct Cli {
    /// HTML file containing the renderDot payload
    #[arg(default_value = "blueprint/web/dep_graph_document.html")]
    html_file: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = "atomization/dep_graph.json")]
    output: PathBuf,

    /// Minimal output
    #[arg(long)]
    quiet: bool,

    /// Skip the graph analysis after writing
    #[arg(long)]
    no_analysis: bool,

    /// Write an empty graph instead of failing when the payload is missing or malformed
    #[arg(long)]
    allow_empty: bool,

    /// Fail on statements that are neither nodes, edges nor default blocks
    #[arg(long)]
    strict: bool,

    /// Class attribute of modal containers
    #[arg(long, default_value = "dep-modal-container")]
    modal_class: String,

    /// Id suffix of modal containers
    #[arg(long, default_value = "_modal")]
    modal_suffix: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    run(&cli)
}

fn init_tracing(quiet: bool) {
    let fallback = if quiet { "error" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.html_file.exists() {
        bail!("file `{}` does not exist", cli.html_file.display());
    }
    if !cli.quiet {
        println!("{} {}", "Extracting".green().bold(), cli.html_file.display());
    }

    let html = fs::read_to_string(&cli.html_file)
        .with_context(|| format!("failed to read {}", cli.html_file.display()))?;
    let document_options = DocumentOptions {
        modal_class: cli.modal_class.clone(),
        modal_suffix: cli.modal_suffix.clone(),
    };
    let document = load_document(&html, &document_options)
        .with_context(|| format!("failed to read modal containers from {}", cli.html_file.display()))?;

    if !cli.quiet {
        println!(
            "  Modal containers: {}",
            document.content.len().to_string().cyan()
        );
        if !document.content.is_empty() {
            let sample: Vec<&str> = document
                .content
                .keys()
                .take(SAMPLE_IDS)
                .map(String::as_str)
                .collect();
            let more = if document.content.len() > SAMPLE_IDS { ", ..." } else { "" };
            println!("  Sample ids: {}{}", sample.join(", ").yellow(), more);
        }
    }

    let options = ExtractOptions {
        reject_unrecognized: cli.strict,
    };
    let extracted = match document.payload.as_deref() {
        Some(payload) => extract_with_options(payload, &document.content, &options),
        None => Err(ExtractError::Structural(StructuralError::MissingPayload)),
    };
    let extraction = match extracted {
        Ok(extraction) => extraction,
        Err(ExtractError::Structural(err)) if cli.allow_empty => {
            tracing::error!(error = %err, "no usable graph payload; writing an empty graph");
            Extraction {
                graph: DependencyGraph::empty(),
                report: ExtractionReport::default(),
            }
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to extract dependency graph from {}", cli.html_file.display())
            })
        }
    };

    write_graph(&extraction.graph, &cli.output)?;
    if !cli.quiet {
        println!("{} {}", "wrote".green().bold(), cli.output.display().to_string().bold());
    }

    if !cli.quiet && !cli.no_analysis {
        analyze::print_analysis(&extraction);
    }
    Ok(())
}

fn write_graph(graph: &DependencyGraph, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let mut json = graph.to_json_pretty()?;
    json.push('\n');
    fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;
    Ok(())
}
