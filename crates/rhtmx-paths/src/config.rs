// Router configuration loaded from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path as FsPath;

use crate::router::{ComparatorKind, MatchPolicy};

/// Crate configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,
}

/// Router configuration
///
/// ```toml
/// [router]
/// comparator = "longest"
/// policy = "exact"
/// exhaustive = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterConfig {
    /// Comparator between competing matches (default: "best")
    #[serde(default)]
    pub comparator: ComparatorKind,

    /// Whether partial matches can win (default: "partial")
    #[serde(default)]
    pub policy: MatchPolicy,

    /// Fail dispatch when nothing matches instead of returning no result
    #[serde(default = "default_false")]
    pub exhaustive: bool,
}

fn default_false() -> bool {
    false
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            comparator: ComparatorKind::default(),
            policy: MatchPolicy::default(),
            exhaustive: default_false(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or blank file yields the defaults.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content).context("Invalid router configuration")?;
        Ok(config)
    }
}
