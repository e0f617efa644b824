//! Source-to-manifest pipeline: parse, walk, resolve comments, enumerate,
//! group, then emit.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use schemagen_config::SchemagenConfig;
use schemagen_core::{
    CommentIndex, ExampleGenerator, ExampleRegistry, Manifest, MethodGroup, group_methods,
};
use schemagen_parser::{
    EmbeddedInterface, GoPackage, InterfaceMethod, ParseDiagnostic, TypeIndex, enumerate_methods,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Attach input/response examples to every method.
    pub examples: bool,
}

/// Everything one run produces.
#[derive(Debug)]
pub struct ApiDocs {
    pub groups: Vec<MethodGroup>,
    pub manifest: Manifest,
    pub diagnostics: Vec<ParseDiagnostic>,
}

pub fn generate(root: &Path, config: &SchemagenConfig, options: Options) -> anyhow::Result<ApiDocs> {
    let target = &config.target;
    let api_dir = config.api_dir(root);
    let package = GoPackage::load(&api_dir, &target.package)
        .with_context(|| format!("failed to parse Go package in {}", api_dir.display()))?;

    let comments = match package.walk_interface(&target.interface) {
        Some(decl) => {
            let texts: Vec<(&str, Vec<String>)> = decl
                .methods
                .values()
                .map(|m| (m.name.as_str(), m.comment_texts()))
                .collect();
            CommentIndex::from_methods(texts.iter().map(|(name, cs)| (*name, cs.as_slice())))
        }
        None => CommentIndex::default(),
    };

    let index = package.type_index();
    let names = enumerate_methods(&index, &target.interface)?;
    tracing::info!(
        interface = %target.interface,
        methods = names.len(),
        documented_groups = comments.groups().len(),
        "enumerated interface methods"
    );

    let mut groups = group_methods(&names, &comments);
    if options.examples {
        let mut registry = ExampleRegistry::seeded();
        registry.extend(config.examples.clone());
        attach_examples(&mut groups, &package, &index, &target.interface, &mut registry)?;
    }

    let manifest = Manifest::from_groups(&groups, &config.output.subscription_methods);
    tracing::debug!(entries = manifest.len(), "built manifest");
    Ok(ApiDocs {
        groups,
        manifest,
        diagnostics: package.diagnostics().to_vec(),
    })
}

fn attach_examples(
    groups: &mut [MethodGroup],
    package: &GoPackage,
    index: &TypeIndex,
    interface: &str,
    registry: &mut ExampleRegistry,
) -> anyhow::Result<()> {
    let signatures = method_signatures(package, index, interface);
    let mut generator = ExampleGenerator::new(registry, index);

    for method in groups.iter_mut().flat_map(|g| g.methods.iter_mut()) {
        let signature = signatures
            .get(&method.name)
            .with_context(|| format!("no signature found for method {}", method.name))?;
        let (inputs, response) = generator
            .method_examples(&signature.params, &signature.results)
            .with_context(|| format!("failed to build examples for {}", method.name))?;
        method.input_example = Some(inputs);
        method.response_example = Some(response);
    }
    Ok(())
}

/// Signatures of every method in the interface's method set.
///
/// Methods declared on the interface itself shadow embedded ones.
fn method_signatures(
    package: &GoPackage,
    index: &TypeIndex,
    interface: &str,
) -> HashMap<String, InterfaceMethod> {
    let mut signatures = HashMap::new();
    let mut pending = vec![interface.to_string()];
    let mut visited = Vec::new();

    while let Some(name) = pending.pop() {
        if visited.contains(&name) {
            continue;
        }
        if let Some(decl) = package.walk_interface(&name) {
            for (method_name, method) in decl.methods {
                signatures.entry(method_name).or_insert(method);
            }
        }
        if let Some(shape) = index.interface(&name) {
            for embedded in shape.embedded.iter().rev() {
                if let EmbeddedInterface::Local { name } = embedded {
                    pending.push(name.clone());
                }
            }
        }
        visited.push(name);
    }
    signatures
}
