//! Example value synthesis for method inputs and responses.
//!
//! Lookup order: the [`ExampleRegistry`] first, then dispatch on the kind of
//! the [`GoType`], recursing into element and field types. A type with no
//! derivable example is a hard [`CoreError`]; there are no silent defaults.

use std::collections::HashMap;

use base64::Engine as _;
use serde_json::{Map, Value, json};

use crate::errors::CoreError;
use crate::go_type::{GoField, GoType, is_exported};

/// Looks up the underlying type of a named type declared in the package.
pub trait TypeResolver {
    fn resolve(&self, name: &str) -> Option<&GoType>;
}

impl TypeResolver for HashMap<String, GoType> {
    fn resolve(&self, name: &str) -> Option<&GoType> {
        self.get(name)
    }
}

/// Known example values keyed by canonical Go type spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleRegistry {
    values: HashMap<String, Value>,
}

impl Default for ExampleRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ExampleRegistry {
    /// A registry with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// A registry seeded with the well-known API types.
    #[must_use]
    pub fn seeded() -> Self {
        let mut registry = Self::empty();
        registry.insert("auth.Permission", json!("write"));
        registry.insert("string", json!("string value"));
        registry.insert("uint64", json!(42));
        registry.insert("byte", json!(7));
        // encoding/json writes byte slices as base64 strings
        registry.insert(
            "[]byte",
            json!(base64::engine::general_purpose::STANDARD.encode(b"byte array")),
        );
        registry.insert("bool", json!(true));
        registry.insert("int", json!(9));
        registry.insert("int64", json!(9));
        registry.insert("float64", json!(42.5));
        registry.insert("error", json!({}));
        registry
    }

    pub fn insert(&mut self, type_name: impl Into<String>, value: Value) {
        self.values.insert(type_name.into(), value);
    }

    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&Value> {
        self.values.get(type_name)
    }
}

impl<K: Into<String>> Extend<(K, Value)> for ExampleRegistry {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        for (type_name, value) in iter {
            self.insert(type_name, value);
        }
    }
}

/// Builds example values, caching declared struct examples in the borrowed
/// registry.
pub struct ExampleGenerator<'a, R: TypeResolver> {
    registry: &'a mut ExampleRegistry,
    resolver: &'a R,
    in_progress: Vec<String>,
}

impl<'a, R: TypeResolver> ExampleGenerator<'a, R> {
    #[must_use]
    pub const fn new(registry: &'a mut ExampleRegistry, resolver: &'a R) -> Self {
        Self {
            registry,
            resolver,
            in_progress: Vec::new(),
        }
    }

    /// JSON-encoded `(inputs, response)` examples for one method.
    ///
    /// The first parameter is the request context and is skipped. A method
    /// without results has a `null` response.
    ///
    /// # Errors
    /// Returns `CoreError` if any parameter or the first result has no example.
    pub fn method_examples(
        &mut self,
        params: &[GoType],
        results: &[GoType],
    ) -> Result<(String, String), CoreError> {
        let inputs = params
            .iter()
            .skip(1)
            .map(|ty| self.example(ty))
            .collect::<Result<Vec<_>, _>>()?;
        let response = match results.first() {
            Some(ty) => self.example(ty)?,
            None => Value::Null,
        };
        Ok((
            serde_json::to_string(&Value::Array(inputs))?,
            serde_json::to_string(&response)?,
        ))
    }

    /// Example value for a single type.
    ///
    /// # Errors
    /// Returns `CoreError::NoExample` for kinds without a derivable example
    /// and `CoreError::UnresolvedType` for unknown named types.
    pub fn example(&mut self, ty: &GoType) -> Result<Value, CoreError> {
        let key = ty.to_string();
        if let Some(value) = self.registry.get(&key) {
            return Ok(value.clone());
        }

        match ty {
            GoType::Slice { elem } => Ok(Value::Array(vec![self.example(elem)?])),
            GoType::Chan { elem } => self.example(elem),
            GoType::Array {
                len: Some(len),
                elem,
            } => {
                let value = self.example(elem)?;
                Ok(Value::Array(vec![value; *len]))
            }
            GoType::Struct { fields } => self.struct_example(&key, fields),
            GoType::Pointer { elem } => {
                if self.is_struct(elem) {
                    self.example(elem)
                } else {
                    Err(CoreError::NoExample(key))
                }
            }
            GoType::Interface => Ok(json!({})),
            GoType::Named {
                package: None,
                name,
            } => self.named_example(&key, name),
            GoType::Named {
                package: Some(_), ..
            } => Err(CoreError::UnresolvedType(key)),
            GoType::Array { len: None, .. }
            | GoType::Map { .. }
            | GoType::Func { .. }
            | GoType::Other { .. } => Err(CoreError::NoExample(key)),
        }
    }

    fn named_example(&mut self, key: &str, name: &str) -> Result<Value, CoreError> {
        let resolver = self.resolver;
        let Some(underlying) = resolver.resolve(name) else {
            return Err(if is_exported(name) {
                CoreError::UnresolvedType(key.to_string())
            } else {
                CoreError::NoExample(key.to_string())
            });
        };

        match underlying {
            GoType::Struct { fields } => {
                let value = self.struct_example(key, fields)?;
                self.registry.insert(key, value.clone());
                Ok(value)
            }
            other => self.example(other),
        }
    }

    fn struct_example(&mut self, key: &str, fields: &[GoField]) -> Result<Value, CoreError> {
        if self.in_progress.iter().any(|k| k == key) {
            return Err(CoreError::NoExample(format!("{key} (recursive)")));
        }
        self.in_progress.push(key.to_string());

        let result = fields
            .iter()
            .filter(|field| is_exported(&field.name))
            .map(|field| -> Result<(String, Value), CoreError> {
                Ok((field.name.clone(), self.example(&field.ty)?))
            })
            .collect::<Result<Map<_, _>, _>>();

        self.in_progress.pop();
        result.map(Value::Object)
    }

    fn is_struct(&self, ty: &GoType) -> bool {
        match ty {
            GoType::Struct { .. } => true,
            GoType::Named {
                package: None,
                name,
            } => matches!(self.resolver.resolve(name), Some(GoType::Struct { .. })),
            _ => false,
        }
    }
}
