// src/config/file.rs
// File-based configuration from ~/.leadscout/config.toml

use crate::allocator::StrategyKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct LeadScoutConfig {
    #[serde(default)]
    pub allocator: AllocatorSection,
    #[serde(default)]
    pub catalog: CatalogSection,
}

/// Allocator configuration section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct AllocatorSection {
    /// "rotating" or "fixed_top_tier"
    pub strategy: Option<StrategyKind>,
    /// Append each category's backup communities (fixed_top_tier only)
    pub include_backup: Option<bool>,
}

/// Catalog configuration section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct CatalogSection {
    /// Replacement catalog TOML; the built-in table is used when unset
    pub path: Option<PathBuf>,
}

impl LeadScoutConfig {
    /// Load config from ~/.leadscout/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Directory holding config.toml and .env
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".leadscout")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}
