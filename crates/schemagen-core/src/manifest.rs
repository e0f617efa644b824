//! The emitted manifest: a flat JSON object keyed by method name.
//!
//! Keys are kept in a `BTreeMap`, so serialization order is the sorted
//! method order and repeated runs over the same source are byte-identical.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::CoreError;
use crate::grouping::MethodGroup;

/// Per-method record. Serializes as `{}` unless the method is a subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MethodRecord {
    #[serde(skip_serializing_if = "is_false")]
    pub subscription: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Method name -> record map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    methods: BTreeMap<String, MethodRecord>,
}

impl Manifest {
    /// Build the manifest from the sorted groups.
    ///
    /// Grouping does not change the output shape; every method of every
    /// group becomes one top-level key.
    #[must_use]
    pub fn from_groups<S: AsRef<str>>(groups: &[MethodGroup], subscriptions: &[S]) -> Self {
        let mut methods = BTreeMap::new();
        for group in groups {
            for method in &group.methods {
                let subscription = subscriptions.iter().any(|s| s.as_ref() == method.name);
                methods.insert(method.name.clone(), MethodRecord { subscription });
            }
        }
        Self { methods }
    }

    #[must_use]
    pub fn get(&self, method: &str) -> Option<&MethodRecord> {
        self.methods.get(method)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Compact JSON encoding of the manifest.
    ///
    /// # Errors
    /// Returns `CoreError::Serialize` if encoding fails.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
