//! Which Go package and interface to document.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_interface() -> String {
    "StorageMiner".to_string()
}

fn default_package() -> String {
    "api".to_string()
}

fn default_api_dir() -> String {
    "api".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TargetConfig {
    /// Name of the interface whose methods are documented.
    #[serde(default = "default_interface")]
    pub interface: String,

    /// Go package name the source files must declare.
    #[serde(default = "default_package")]
    pub package: String,

    /// Directory holding the package, relative to the project root.
    #[serde(default = "default_api_dir")]
    pub api_dir: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            package: default_package(),
            api_dir: default_api_dir(),
        }
    }
}

impl TargetConfig {
    /// Reject empty names.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("target.interface", &self.interface),
            ("target.package", &self.package),
            ("target.api_dir", &self.api_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
