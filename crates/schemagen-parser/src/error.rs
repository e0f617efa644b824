//! Parser error types for schemagen-parser.

use std::path::PathBuf;

/// Errors that abort loading or enumeration. Syntax errors are not among
/// them; they are reported as [`crate::ParseDiagnostic`]s.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no files of package '{package}' found in {}", dir.display())]
    PackageNotFound { package: String, dir: PathBuf },

    #[error("interface '{0}' is not declared in the package")]
    InterfaceNotFound(String),
}
