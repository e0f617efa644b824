//! Method-set enumeration of an interface.
//!
//! The set is the interface's exported methods plus, recursively, those of
//! every embedded interface declared in the same package. It is the
//! authoritative list of names that end up in the manifest.

use std::collections::{BTreeSet, HashSet};

use schemagen_core::go_type::is_exported;

use crate::error::ParserError;
use crate::types::{EmbeddedInterface, TypeIndex};

/// Sorted, de-duplicated exported method names of `interface`.
///
/// # Errors
/// Returns `ParserError::InterfaceNotFound` if `interface` is not an
/// interface type declared in the package.
pub fn enumerate_methods(index: &TypeIndex, interface: &str) -> Result<Vec<String>, ParserError> {
    if index.interface(interface).is_none() {
        return Err(ParserError::InterfaceNotFound(interface.to_string()));
    }

    let mut seen = HashSet::new();
    let mut methods = BTreeSet::new();
    collect(index, interface, &mut seen, &mut methods);
    Ok(methods.into_iter().collect())
}

fn collect<'a>(
    index: &'a TypeIndex,
    name: &'a str,
    seen: &mut HashSet<&'a str>,
    methods: &mut BTreeSet<String>,
) {
    if !seen.insert(name) {
        return;
    }
    let Some(shape) = index.interface(name) else {
        tracing::warn!(name, "embedded type is not an interface declared in the package");
        return;
    };

    methods.extend(shape.methods.iter().filter(|m| is_exported(m)).cloned());

    for embedded in &shape.embedded {
        match embedded {
            EmbeddedInterface::Local { name } => collect(index, name, seen, methods),
            EmbeddedInterface::Qualified { package, name } => {
                tracing::warn!(
                    interface = name.as_str(),
                    package = package.as_str(),
                    "cannot enumerate methods of an interface from another package"
                );
            }
            EmbeddedInterface::Other { text } => {
                tracing::debug!(term = text.as_str(), "ignoring non-interface embed");
            }
        }
    }
}
