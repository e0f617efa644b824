use std::io::Write;

use schemagen_core::markdown;

use crate::cli::OutputFormat;
use crate::pipeline::ApiDocs;

/// Render the generated docs in the requested format.
///
/// JSON is compact with no trailing newline.
pub fn render(docs: &ApiDocs, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(docs.manifest.to_json()?),
        OutputFormat::Markdown => Ok(markdown::render(&docs.groups)),
    }
}

/// Write fully rendered output to stdout in one go.
pub fn write_stdout(rendered: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
