use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options controlling docstring preprocessing.
///
/// Unknown keys in a loaded configuration are ignored; missing keys fall
/// back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessorConfig {
    /// Append a `{#symbol}` heading anchor to generated titles.
    pub header_anchor_enabled: bool,
}

/// Errors emitted while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document was not valid JSON.
    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PreprocessorConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }
}
