//! Configuration types and management
//!
//! Everything is optional: with no config file and no flags the tool scans
//! `/dev`, aborts on the first unreadable device and prints plain text.

use crate::device::DEFAULT_DEV_ROOT;
use crate::error::{ListError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output format of the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `name (size)` line per device, for dmenu and friends
    #[default]
    Text,
    /// A single JSON array
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Lister configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the device nodes
    pub dev_root: PathBuf,

    /// Skip devices that cannot be opened or sized instead of aborting
    pub skip_unreadable: bool,

    /// Output format
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dev_root: PathBuf::from(DEFAULT_DEV_ROOT),
            skip_unreadable: false,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ListError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| ListError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.dev_root.as_os_str().is_empty() {
            return Err(ListError::config("Device root cannot be empty"));
        }

        Ok(())
    }
}
