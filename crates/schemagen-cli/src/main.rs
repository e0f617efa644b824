use anyhow::Context;
use clap::Parser;

mod cli;
mod output;
mod pipeline;

fn main() {
    if let Err(error) = run() {
        eprintln!("schemagen error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = schemagen_config::SchemagenConfig::load(&cli.root)
        .context("failed to load schemagen configuration")?;
    if let Some(interface) = &cli.interface {
        config.target.interface.clone_from(interface);
        config.target.validate()?;
    }

    let examples = cli.examples && cli.format == cli::OutputFormat::Markdown;
    if cli.examples && !examples {
        tracing::warn!("--examples only applies to markdown output; ignoring");
    }

    let docs = pipeline::generate(&cli.root, &config, pipeline::Options { examples })?;
    if !docs.diagnostics.is_empty() {
        tracing::warn!(
            count = docs.diagnostics.len(),
            "sources had parse errors; the manifest may be incomplete"
        );
    }
    let rendered = output::render(&docs, cli.format)?;
    output::write_stdout(&rendered)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SCHEMAGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries the manifest
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
