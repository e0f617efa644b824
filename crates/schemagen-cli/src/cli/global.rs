use clap::ValueEnum;

/// What gets written to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Flat method manifest consumed by the docs pipeline.
    Json,
    /// Grouped method documentation.
    Markdown,
}
