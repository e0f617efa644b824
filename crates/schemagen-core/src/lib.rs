//! # schemagen-core
//!
//! Language-neutral core of the API documentation manifest generator.
//!
//! - Go type expression model shared with the parser
//! - `MethodGroup:` comment resolution with the placeholder fallback
//! - Method grouping by name prefix and deterministic sorting
//! - Manifest emission (flat JSON map) and markdown rendering
//! - Registry-backed example value generation

pub mod comments;
pub mod errors;
pub mod examples;
pub mod go_type;
pub mod grouping;
pub mod manifest;
pub mod markdown;

pub use comments::{CommentIndex, GROUP_MARKER, NO_COMMENT};
pub use errors::CoreError;
pub use examples::{ExampleGenerator, ExampleRegistry, TypeResolver};
pub use go_type::{GoField, GoType};
pub use grouping::{Method, MethodGroup, group_methods, method_group_from_name};
pub use manifest::{Manifest, MethodRecord};
