//! Go extractor using `KindMatcher` over the tree-sitter Go grammar.
//!
//! Finds the package clause, syntax errors, the target interface with its
//! directly declared methods and their comment groups, and every type
//! declaration of a file.

use std::collections::BTreeMap;
use std::path::Path;

use ast_grep_core::Node;
use ast_grep_core::matcher::KindMatcher;
use ast_grep_core::ops::Any;
use ast_grep_language::SupportLang;

use crate::types::{InterfaceDecl, InterfaceMethod, InterfaceShape, TypeDecl};

mod helpers;

use helpers::{BodyElement, ElementKind, lower_type};

/// Name in the file's `package` clause.
pub fn package_name<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
) -> Option<String> {
    let clause = root
        .root()
        .children()
        .find(|c| c.kind().as_ref() == "package_clause")?;
    clause
        .children()
        .find(|c| c.kind().as_ref() == "package_identifier")
        .map(|n| n.text().to_string())
}

/// `(line, message)` of every syntax error: outermost `ERROR` nodes and the
/// `MISSING` tokens tree-sitter inserts while recovering.
pub fn syntax_errors<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
) -> Vec<(u32, String)> {
    let mut errors = Vec::new();
    collect_errors(&root.root(), &mut errors);
    errors
}

fn collect_errors<D: ast_grep_core::Doc>(node: &Node<D>, out: &mut Vec<(u32, String)>) {
    if node.is_missing() {
        out.push((helpers::start_line(node), format!("missing \"{}\"", node.kind())));
        return;
    }
    if node.kind().as_ref() == "ERROR" {
        let text = node.text();
        let snippet: String = text.lines().next().unwrap_or_default().chars().take(60).collect();
        out.push((
            helpers::start_line(node),
            format!("syntax error near `{}`", snippet.trim()),
        ));
        return;
    }
    for child in node.children() {
        collect_errors(&child, out);
    }
}

/// Walk the tree for the interface named `target`.
///
/// Only the interface's own method list is collected; embedded interfaces
/// are recorded but not expanded, and no other declaration is descended
/// into. Returns `None` when the file does not declare it.
pub fn walk_interface<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
    target: &str,
    file: &Path,
) -> Option<InterfaceDecl> {
    let matcher = KindMatcher::new("type_spec", SupportLang::Go);

    for spec in root.root().find_all(&matcher) {
        if type_name(&spec).as_deref() != Some(target) {
            continue;
        }
        let Some(body) = spec
            .field("type")
            .filter(|t| t.kind().as_ref() == "interface_type")
        else {
            tracing::warn!(name = target, file = %file.display(), "declaration is not an interface");
            continue;
        };

        let mut decl = InterfaceDecl {
            name: target.to_string(),
            file: file.to_path_buf(),
            methods: BTreeMap::new(),
            embedded: Vec::new(),
        };
        for element in helpers::interface_elements(&body) {
            let BodyElement {
                kind,
                start_line,
                end_line,
                comments,
            } = element;
            match kind {
                ElementKind::Method {
                    name,
                    signature,
                    params,
                    results,
                } => {
                    decl.methods.insert(
                        name.clone(),
                        InterfaceMethod {
                            name,
                            signature,
                            params,
                            results,
                            comments,
                            start_line,
                            end_line,
                        },
                    );
                }
                ElementKind::Embedded(embedded) => decl.embedded.push(embedded),
            }
        }
        tracing::debug!(
            name = target,
            file = %file.display(),
            methods = decl.methods.len(),
            embedded = decl.embedded.len(),
            "found target interface"
        );
        return Some(decl);
    }
    None
}

/// Every `type` declaration in the file, including aliases.
pub fn extract_type_decls<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
) -> Vec<TypeDecl> {
    let matcher = Any::new(vec![
        KindMatcher::new("type_spec", SupportLang::Go),
        KindMatcher::new("type_alias", SupportLang::Go),
    ]);

    let mut decls = Vec::new();
    for node in root.root().find_all(&matcher) {
        let Some(name) = type_name(&node) else {
            continue;
        };
        let Some(type_node) = node.field("type") else {
            continue;
        };
        let interface = (type_node.kind().as_ref() == "interface_type")
            .then(|| interface_shape(&type_node));
        decls.push(TypeDecl {
            name,
            ty: lower_type(&type_node),
            interface,
        });
    }
    decls
}

fn type_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.children()
        .find(|c| c.kind().as_ref() == "type_identifier")
        .map(|n| n.text().to_string())
}

fn interface_shape<D: ast_grep_core::Doc>(body: &Node<D>) -> InterfaceShape {
    let mut shape = InterfaceShape::default();
    for element in helpers::interface_elements(body) {
        match element.kind {
            ElementKind::Method { name, .. } => shape.methods.push(name),
            ElementKind::Embedded(embedded) => shape.embedded.push(embedded),
        }
    }
    shape
}

#[cfg(test)]
mod tests;
