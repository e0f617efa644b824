//! Syntax-tree extractors.

pub mod go;
