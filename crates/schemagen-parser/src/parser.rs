//! ast-grep wrapper and Go package loading.

use std::path::{Path, PathBuf};

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;
use crate::extractors::go;
use crate::types::{InterfaceDecl, ParseDiagnostic, TypeIndex};

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Parse Go source into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}

/// One parsed source file of the package.
pub struct ParsedFile {
    pub path: PathBuf,
    pub tree: AstTree,
}

/// All files of one Go package, parsed with comments retained.
pub struct GoPackage {
    files: Vec<ParsedFile>,
    diagnostics: Vec<ParseDiagnostic>,
}

impl GoPackage {
    /// Parse every `.go` file in `dir` that belongs to `package`.
    ///
    /// Files are read in sorted path order. Syntax errors do not fail the
    /// load; they are logged and kept as diagnostics while the partial tree
    /// is used as is.
    ///
    /// # Errors
    /// Returns `ParserError::ReadFailed` if the directory or a file cannot be
    /// read and `ParserError::PackageNotFound` if no file declares `package`.
    pub fn load(dir: &Path, package: &str) -> Result<Self, ParserError> {
        let read_failed = |source| ParserError::ReadFailed {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_failed)? {
            let path = entry.map_err(read_failed)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "go") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let source = std::fs::read_to_string(&path).map_err(|source| {
                ParserError::ReadFailed {
                    path: path.clone(),
                    source,
                }
            })?;
            sources.push((path, source));
        }

        Self::from_sources(dir, package, sources)
    }

    /// Build a package from in-memory `(path, source)` pairs.
    ///
    /// # Errors
    /// Returns `ParserError::PackageNotFound` if no source declares `package`.
    pub fn from_sources<I>(dir: &Path, package: &str, sources: I) -> Result<Self, ParserError>
    where
        I: IntoIterator<Item = (PathBuf, String)>,
    {
        let mut files = Vec::new();
        let mut diagnostics = Vec::new();

        for (path, source) in sources {
            let tree = parse_source(&source);

            match go::package_name(&tree) {
                Some(name) if name == package => {}
                other => {
                    tracing::debug!(
                        file = %path.display(),
                        package = other.as_deref().unwrap_or("<none>"),
                        "skipping file outside the target package"
                    );
                    continue;
                }
            }

            for (line, message) in go::syntax_errors(&tree) {
                tracing::warn!(file = %path.display(), line, %message, "parse error");
                diagnostics.push(ParseDiagnostic {
                    file: path.clone(),
                    line,
                    message,
                });
            }

            files.push(ParsedFile { path, tree });
        }

        if files.is_empty() {
            return Err(ParserError::PackageNotFound {
                package: package.to_string(),
                dir: dir.to_path_buf(),
            });
        }

        tracing::debug!(
            package,
            files = files.len(),
            diagnostics = diagnostics.len(),
            "parsed package"
        );
        Ok(Self {
            files,
            diagnostics,
        })
    }

    #[must_use]
    pub fn files(&self) -> &[ParsedFile] {
        &self.files
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    /// The interface named `target`, from the first file declaring it.
    #[must_use]
    pub fn walk_interface(&self, target: &str) -> Option<InterfaceDecl> {
        self.files
            .iter()
            .find_map(|file| go::walk_interface(&file.tree, target, &file.path))
    }

    /// Every type declared anywhere in the package.
    #[must_use]
    pub fn type_index(&self) -> TypeIndex {
        self.files
            .iter()
            .flat_map(|file| go::extract_type_decls(&file.tree))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const STORAGE: &str = include_str!("../tests/fixtures/api_storage.go");
    const COMMON: &str = include_str!("../tests/fixtures/api_common.go");

    fn write_package(dir: &Path) {
        std::fs::write(dir.join("api_storage.go"), STORAGE).unwrap();
        std::fs::write(dir.join("api_common.go"), COMMON).unwrap();
        std::fs::write(dir.join("README.md"), "not go").unwrap();
        std::fs::write(
            dir.join("docgen_test.go"),
            "package api_test\n\ntype StorageMiner interface{ Other() }\n",
        )
        .unwrap();
    }

    #[test]
    fn parse_source_produces_valid_tree() {
        let tree = parse_source("package api\n");
        assert_eq!(tree.root().kind().as_ref(), "source_file");
    }

    #[test]
    fn load_reads_only_target_package_files() {
        let dir = tempfile::tempdir().unwrap();
        write_package(dir.path());

        let package = GoPackage::load(dir.path(), "api").unwrap();
        let names: Vec<_> = package
            .files()
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["api_common.go", "api_storage.go"]);
        assert!(package.diagnostics().is_empty());
    }

    #[test]
    fn missing_directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GoPackage::load(&dir.path().join("nope"), "api")
            .err()
            .expect("should fail");
        assert!(matches!(err, ParserError::ReadFailed { .. }));
    }

    #[test]
    fn directory_without_package_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("main.go"), "package main\n").unwrap();
        let err = GoPackage::load(dir.path(), "api").err().expect("should fail");
        assert!(matches!(err, ParserError::PackageNotFound { package, .. } if package == "api"));
    }

    #[test]
    fn syntax_errors_are_reported_and_parsing_continues() {
        let broken = "package api\n\ntype StorageMiner interface {\n\tSectorsList() ) ) @\n}\n\ntype Other interface {\n\tVersion() string\n}\n";
        let package = GoPackage::from_sources(
            Path::new("api"),
            "api",
            [(PathBuf::from("api/broken.go"), broken.to_string())],
        )
        .unwrap();

        assert!(!package.diagnostics().is_empty());
        assert_eq!(package.diagnostics()[0].file, PathBuf::from("api/broken.go"));
    }

    #[rstest]
    #[case("package api\n\ntype StorageMiner interface {\n\tSectorsList(x int error\n}\n")]
    #[case("package api\n\nfunc pledge() {\n\tg(1\n}\n")]
    fn inserted_tokens_are_reported(#[case] source: &str) {
        let package = GoPackage::from_sources(
            Path::new("api"),
            "api",
            [(PathBuf::from("api/missing.go"), source.to_string())],
        )
        .unwrap();

        let diagnostic = package
            .diagnostics()
            .iter()
            .find(|d| d.message == "missing \")\"")
            .unwrap_or_else(|| panic!("no missing-token diagnostic in {:?}", package.diagnostics()));
        assert_eq!(diagnostic.file, PathBuf::from("api/missing.go"));
        assert!(diagnostic.line >= 4, "{diagnostic:?}");
    }

    #[test]
    fn walk_interface_searches_all_files() {
        let dir = tempfile::tempdir().unwrap();
        write_package(dir.path());
        let package = GoPackage::load(dir.path(), "api").unwrap();

        let miner = package.walk_interface("StorageMiner").expect("StorageMiner");
        assert!(miner.file.ends_with("api_storage.go"));
        assert!(miner.methods.contains_key("SectorsList"));
        assert!(!miner.methods.contains_key("Other"));

        let common = package.walk_interface("Common").expect("Common");
        assert!(common.methods.contains_key("Version"));
        assert!(package.walk_interface("FullNode").is_none());
    }

    #[test]
    fn type_index_covers_every_file() {
        let dir = tempfile::tempdir().unwrap();
        write_package(dir.path());
        let package = GoPackage::load(dir.path(), "api").unwrap();

        let index = package.type_index();
        assert!(index.interface("StorageMiner").is_some());
        assert!(index.interface("Common").is_some());
        assert!(index.get("SectorInfo").is_some());
        assert!(index.interface("SectorInfo").is_none());
    }
}
