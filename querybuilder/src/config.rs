//! Builder configuration
//!
//! ```toml
//! [output]
//! destination = "elasticsearch"
//! pretty = false
//!
//! [defaults]
//! size = 20
//! from = 0
//! ```

use crate::builder::Destination;
use crate::error::QueryError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BuilderConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: RequestDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub destination: Destination,
    /// Pretty-print built requests
    #[serde(default)]
    pub pretty: bool,
}

/// Values every new builder starts with. Zero means unset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RequestDefaults {
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub from: usize,
}

impl BuilderConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded builder config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| QueryError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}
