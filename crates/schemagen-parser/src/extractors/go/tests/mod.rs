use std::path::Path;

use ast_grep_language::{LanguageExt, SupportLang};

use super::*;
pub(super) use schemagen_core::GoType;

mod comment_text;

const STORAGE: &str = include_str!("../../../../tests/fixtures/api_storage.go");

fn walk(source: &str, target: &str) -> Option<InterfaceDecl> {
    let root = SupportLang::Go.ast_grep(source);
    walk_interface(&root, target, Path::new("api/api.go"))
}

fn storage_miner() -> InterfaceDecl {
    walk(STORAGE, "StorageMiner").expect("fixture declares StorageMiner")
}

fn comments_of(decl: &InterfaceDecl, method: &str) -> Vec<String> {
    decl.methods
        .get(method)
        .unwrap_or_else(|| panic!("should find method '{method}'"))
        .comment_texts()
}

fn type_decls(source: &str) -> Vec<TypeDecl> {
    let root = SupportLang::Go.ast_grep(source);
    extract_type_decls(&root)
}
