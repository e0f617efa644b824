//! # schemagen-config
//!
//! Layered configuration loading for schemagen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCHEMAGEN_*` prefix, `__` as separator)
//! 2. `<project root>/schemagen.toml`
//! 3. Built-in defaults (document `StorageMiner` in package `api` under
//!    `api/`, with `ChainNotify` as the only subscription and no extra
//!    example values)
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SCHEMAGEN_TARGET__INTERFACE` -> `target.interface`,
//! `SCHEMAGEN_OUTPUT__SUBSCRIPTION_METHODS` -> `output.subscription_methods`.
//!
//! # Usage
//!
//! ```no_run
//! use schemagen_config::SchemagenConfig;
//!
//! let config = SchemagenConfig::load(std::path::Path::new("/path/to/lotus")).expect("config");
//! println!("documenting {}", config.target.interface);
//! ```

mod error;
mod output;
mod target;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use target::TargetConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the optional per-project config file.
pub const CONFIG_FILE: &str = "schemagen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemagenConfig {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Extra example values keyed by Go type spelling (`abi.SectorNumber`,
    /// `*types.TipSet`, `map[ID]string`). They take precedence over the
    /// built-in examples.
    #[serde(default)]
    pub examples: BTreeMap<String, serde_json::Value>,
}

impl SchemagenConfig {
    /// Load configuration for the project at `root` and validate it.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` if a source cannot be read or does not
    /// match the schema, `ConfigError::InvalidValue` if validation fails.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(root).extract()?;
        config.target.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let project_path = root.join(CONFIG_FILE);
        if project_path.exists() {
            figment = figment.merge(Toml::file(project_path));
        }

        figment.merge(Env::prefixed("SCHEMAGEN_").split("__"))
    }

    /// Directory holding the API package.
    #[must_use]
    pub fn api_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.target.api_dir)
    }
}
