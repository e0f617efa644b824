//! Owned data extracted from Go syntax trees.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use schemagen_core::{GoType, TypeResolver};
use serde::{Deserialize, Serialize};

/// A syntax error found while parsing. Parsing continues past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostic {
    pub file: PathBuf,
    pub line: u32,
    pub message: String,
}

/// One comment group: consecutive comments on adjacent lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentGroup {
    /// Text with comment markers removed, as Go's `CommentGroup.Text()`.
    pub text: String,
    pub start_line: u32,
    pub end_line: u32,
}

/// A method signature declared directly on an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceMethod {
    pub name: String,
    pub signature: String,
    pub params: Vec<GoType>,
    pub results: Vec<GoType>,
    /// Comment groups attached to this method, in source order.
    pub comments: Vec<CommentGroup>,
    pub start_line: u32,
    pub end_line: u32,
}

impl InterfaceMethod {
    /// Texts of the attached comment groups.
    #[must_use]
    pub fn comment_texts(&self) -> Vec<String> {
        self.comments.iter().map(|c| c.text.clone()).collect()
    }
}

/// An interface embedded in another interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmbeddedInterface {
    /// Declared in the same package: `Common`.
    Local { name: String },
    /// Declared elsewhere: `api.Common`.
    Qualified { package: String, name: String },
    /// Type-set terms and anything else that is not a plain name.
    Other { text: String },
}

/// The target interface as found by the walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: String,
    pub file: PathBuf,
    /// Directly declared methods keyed by name. Embedded interfaces are
    /// not expanded here.
    pub methods: BTreeMap<String, InterfaceMethod>,
    pub embedded: Vec<EmbeddedInterface>,
}

/// Method names and embeds of an interface type declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceShape {
    pub methods: Vec<String>,
    pub embedded: Vec<EmbeddedInterface>,
}

/// A `type Name ...` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub ty: GoType,
    pub interface: Option<InterfaceShape>,
}

/// Every type declared in a package, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    decls: HashMap<String, TypeDecl>,
}

impl TypeIndex {
    pub fn insert(&mut self, decl: TypeDecl) {
        if self.decls.contains_key(&decl.name) {
            tracing::debug!(name = %decl.name, "type declared more than once; keeping the last");
        }
        self.decls.insert(decl.name.clone(), decl);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.decls.get(name)
    }

    /// The interface shape of `name`, if it is an interface type.
    #[must_use]
    pub fn interface(&self, name: &str) -> Option<&InterfaceShape> {
        self.decls.get(name).and_then(|d| d.interface.as_ref())
    }
}

impl FromIterator<TypeDecl> for TypeIndex {
    fn from_iter<I: IntoIterator<Item = TypeDecl>>(iter: I) -> Self {
        let mut index = Self::default();
        for decl in iter {
            index.insert(decl);
        }
        index
    }
}

impl TypeResolver for TypeIndex {
    fn resolve(&self, name: &str) -> Option<&GoType> {
        self.decls.get(name).map(|d| &d.ty)
    }
}
