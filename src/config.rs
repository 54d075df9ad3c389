//! Extraction policy configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Policy knobs for one extraction round.
///
/// Hosts usually run with the defaults. The struct deserializes from the
/// generator's configuration file; reading that file is the host's job,
/// this crate only parses the fragment it is handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Accept converters whose source and target types coincide.
    #[serde(default = "default_allow_identity")]
    pub allow_identity: bool,

    /// Count only `pub` methods as conversion candidates when walking
    /// Rust impl blocks.
    #[serde(default)]
    pub public_methods_only: bool,
}

fn default_allow_identity() -> bool {
    true
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            allow_identity: default_allow_identity(),
            public_methods_only: false,
        }
    }
}

impl ExtractionConfig {
    /// Parse a TOML fragment, e.g. the `[converters]` table of the host
    /// generator's configuration file.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::Configuration(e.to_string()))
    }
}
