//! Configuration loading.
//!
//! Handles:
//! - Default output format
//! - Default subscription for building IDs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the default config file path.
fn default_config_path() -> Result<PathBuf> {
    ProjectDirs::from("com", "armid", "armid")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (`table` or `json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Subscription used by `armid format` when `--subscription` is omitted.
    #[serde(default = "default_subscription_id", skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
}

fn default_subscription_id() -> Option<String> {
    std::env::var("ARMID_SUBSCRIPTION_ID").ok()
}

impl Config {
    /// Load config from `path`, or from the platform config directory.
    ///
    /// A missing file yields the default config; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = default_config_path()?;
                if !path.exists() {
                    return Ok(Self {
                        subscription_id: default_subscription_id(),
                        ..Self::default()
                    });
                }
                Self::from_file(&path)
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}
