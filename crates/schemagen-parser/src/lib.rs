//! # schemagen-parser
//!
//! ast-grep-based parsing of a Go API package.
//!
//! - loads every `.go` file of one package from a directory, recording
//!   syntax errors as non-fatal diagnostics
//! - walks the tree for one named interface and collects its directly
//!   declared methods together with their attached comment groups
//! - indexes every type declaration of the package
//! - enumerates the full method set of an interface, following embedded
//!   interfaces declared in the same package

pub mod error;
pub mod extractors;
pub mod method_set;
pub mod parser;
pub mod types;

pub use error::ParserError;
pub use method_set::enumerate_methods;
pub use parser::{GoPackage, ParsedFile};
pub use types::{
    CommentGroup, EmbeddedInterface, InterfaceDecl, InterfaceMethod, InterfaceShape,
    ParseDiagnostic, TypeDecl, TypeIndex,
};
