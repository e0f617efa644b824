//! Manifest output settings.

use serde::{Deserialize, Serialize};

fn default_subscription_methods() -> Vec<String> {
    vec!["ChainNotify".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Methods emitted with `{"subscription": true}`.
    #[serde(default = "default_subscription_methods")]
    pub subscription_methods: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            subscription_methods: default_subscription_methods(),
        }
    }
}
