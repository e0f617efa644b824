use std::path::PathBuf;

use clap::Parser;

pub mod global;

pub use global::OutputFormat;

/// Top-level CLI parser for the `schemagen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "schemagen",
    version,
    about = "Emit the method manifest of a Go API interface"
)]
pub struct Cli {
    /// Project root; sources are read from <ROOT>/api unless configured otherwise
    pub root: PathBuf,

    /// Output format: json, markdown
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Add input and response examples to markdown output
    #[arg(long)]
    pub examples: bool,

    /// Interface to document (overrides configuration)
    #[arg(short, long)]
    pub interface: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
