//! Structural model of Go type expressions found in method signatures.
//!
//! The parser lowers tree-sitter type nodes into [`GoType`]; the example
//! generator dispatches on it. `Display` yields the canonical Go spelling,
//! which is also the key used by the example registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Go type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoType {
    /// A (possibly package-qualified) type name: `string`, `abi.SectorNumber`.
    Named {
        package: Option<String>,
        name: String,
    },
    Pointer {
        elem: Box<GoType>,
    },
    Slice {
        elem: Box<GoType>,
    },
    /// `len` is `None` when the length is not an integer literal.
    Array {
        len: Option<usize>,
        elem: Box<GoType>,
    },
    Chan {
        elem: Box<GoType>,
    },
    Map {
        key: Box<GoType>,
        value: Box<GoType>,
    },
    Struct {
        fields: Vec<GoField>,
    },
    Interface,
    Func {
        text: String,
    },
    /// Anything the model does not cover (generic instantiations, ...).
    Other {
        text: String,
    },
}

/// A struct field. Embedded fields carry the type name as their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoField {
    pub name: String,
    pub ty: GoType,
    pub embedded: bool,
}

impl GoType {
    /// An unqualified named type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            package: None,
            name: name.into(),
        }
    }

    /// A package-qualified named type.
    #[must_use]
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            package: Some(package.into()),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn pointer(elem: Self) -> Self {
        Self::Pointer {
            elem: Box::new(elem),
        }
    }

    #[must_use]
    pub fn slice(elem: Self) -> Self {
        Self::Slice {
            elem: Box::new(elem),
        }
    }

    #[must_use]
    pub fn array(len: Option<usize>, elem: Self) -> Self {
        Self::Array {
            len,
            elem: Box::new(elem),
        }
    }

    #[must_use]
    pub fn chan(elem: Self) -> Self {
        Self::Chan {
            elem: Box::new(elem),
        }
    }

    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}

/// Go exports identifiers that start with an uppercase letter.
#[must_use]
pub fn is_exported(name: &str) -> bool {
    name.starts_with(char::is_uppercase)
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named {
                package: Some(package),
                name,
            } => write!(f, "{package}.{name}"),
            Self::Named {
                package: None,
                name,
            } => f.write_str(name),
            Self::Pointer { elem } => write!(f, "*{elem}"),
            Self::Slice { elem } => write!(f, "[]{elem}"),
            Self::Array {
                len: Some(len),
                elem,
            } => write!(f, "[{len}]{elem}"),
            Self::Array { len: None, elem } => write!(f, "[...]{elem}"),
            Self::Chan { elem } => write!(f, "chan {elem}"),
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Struct { fields } => {
                f.write_str("struct {")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(";")?;
                    }
                    if field.embedded {
                        write!(f, " {}", field.ty)?;
                    } else {
                        write!(f, " {} {}", field.name, field.ty)?;
                    }
                }
                if !fields.is_empty() {
                    f.write_str(" ")?;
                }
                f.write_str("}")
            }
            Self::Interface => f.write_str("interface {}"),
            Self::Func { text } | Self::Other { text } => f.write_str(text),
        }
    }
}
