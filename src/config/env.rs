// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use crate::allocator::StrategyKind;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{Level, info, warn};

/// Problems found by `EnvConfig::validate`
///
/// Errors make `leadscout check` fail; warnings are only reported.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable report, errors before warnings
    pub fn report(&self) -> String {
        if self.errors.is_empty() && self.warnings.is_empty() {
            return "Configuration OK".to_string();
        }
        let mut out = Vec::new();
        for (heading, items) in [("Errors:", &self.errors), ("Warnings:", &self.warnings)] {
            if !items.is_empty() {
                out.push(heading.to_string());
                out.extend(items.iter().map(|item| format!("  - {}", item)));
            }
        }
        out.join("\n")
    }
}

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Allocation strategy override (LEADSCOUT_STRATEGY)
    pub strategy: Option<String>,
    /// Append backup communities in fixed-top-tier mode (LEADSCOUT_INCLUDE_BACKUP)
    pub include_backup: Option<bool>,
    /// Replacement catalog file (LEADSCOUT_CATALOG_PATH)
    pub catalog_path: Option<PathBuf>,
    /// Log level filter (LEADSCOUT_LOG)
    pub log_level: Option<String>,
}

impl EnvConfig {
    /// Load all environment configuration (call once at startup)
    pub fn load() -> Self {
        info!("Loading environment configuration");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let include_backup = read("LEADSCOUT_INCLUDE_BACKUP").and_then(|v| {
            let parsed = parse_bool(&v);
            if parsed.is_none() {
                warn!(value = %v, "Invalid LEADSCOUT_INCLUDE_BACKUP, ignoring");
            }
            parsed
        });

        Self {
            strategy: read("LEADSCOUT_STRATEGY"),
            include_backup,
            catalog_path: read("LEADSCOUT_CATALOG_PATH").map(PathBuf::from),
            log_level: read("LEADSCOUT_LOG"),
        }
    }

    /// Parsed LEADSCOUT_LOG level; unknown names are logged and ignored
    pub fn tracing_level(&self) -> Option<Level> {
        let raw = self.log_level.as_deref()?;
        match Level::from_str(raw.trim()) {
            Ok(level) => Some(level),
            Err(_) => {
                warn!(value = raw, "Unknown LEADSCOUT_LOG level, using default");
                None
            }
        }
    }

    /// Parsed strategy override; unknown names are logged and ignored
    pub fn strategy_kind(&self) -> Option<StrategyKind> {
        let raw = self.strategy.as_deref()?;
        match StrategyKind::from_str(raw.trim()) {
            Ok(kind) => Some(kind),
            Err(_) => {
                warn!(value = raw, "Unknown LEADSCOUT_STRATEGY, using default");
                None
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::default();

        if let Some(ref raw) = self.strategy
            && StrategyKind::from_str(raw.trim()).is_err()
        {
            validation.warnings.push(format!(
                "Unknown LEADSCOUT_STRATEGY '{}'. Valid options: rotating, fixed_top_tier",
                raw
            ));
        }

        if self.include_backup == Some(true)
            && self.strategy_kind() != Some(StrategyKind::FixedTopTier)
        {
            validation.warnings.push(
                "LEADSCOUT_INCLUDE_BACKUP only applies to the fixed_top_tier strategy".to_string(),
            );
        }

        if let Some(ref path) = self.catalog_path
            && !path.exists()
        {
            validation.errors.push(format!(
                "LEADSCOUT_CATALOG_PATH '{}' does not exist",
                path.display()
            ));
        }

        validation
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> EnvConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment() {
        let config = env_from(&[]);
        assert!(config.strategy.is_none());
        assert!(config.include_backup.is_none());
        assert!(config.catalog_path.is_none());
        assert!(config.validate().is_valid());
        assert_eq!(config.validate().report(), "Configuration OK");
    }

    #[test]
    fn test_reads_all_keys() {
        let config = env_from(&[
            ("LEADSCOUT_STRATEGY", "fixed_top_tier"),
            ("LEADSCOUT_INCLUDE_BACKUP", "yes"),
            ("LEADSCOUT_CATALOG_PATH", "/tmp/catalog.toml"),
            ("LEADSCOUT_LOG", "debug"),
        ]);
        assert_eq!(config.strategy_kind(), Some(StrategyKind::FixedTopTier));
        assert_eq!(config.include_backup, Some(true));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.toml")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.tracing_level(), Some(Level::DEBUG));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = env_from(&[("LEADSCOUT_STRATEGY", "  "), ("LEADSCOUT_LOG", "")]);
        assert!(config.strategy.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let config = env_from(&[
            ("LEADSCOUT_STRATEGY", "beta"),
            ("LEADSCOUT_INCLUDE_BACKUP", "maybe"),
        ]);
        assert_eq!(config.strategy_kind(), None);
        assert_eq!(config.include_backup, None);

        let validation = config.validate();
        assert!(validation.is_valid());
        assert!(validation.report().contains("Unknown LEADSCOUT_STRATEGY 'beta'"));
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let config = env_from(&[("LEADSCOUT_CATALOG_PATH", "/nonexistent/catalog.toml")]);
        let validation = config.validate();
        assert!(!validation.is_valid());
        assert!(validation.report().starts_with("Errors:"));
    }

    #[test]
    fn test_backup_without_fixed_strategy_warns() {
        let config = env_from(&[("LEADSCOUT_INCLUDE_BACKUP", "1")]);
        let validation = config.validate();
        assert!(validation.is_valid());
        assert_eq!(validation.warnings.len(), 1);
    }

    #[test]
    fn test_tracing_level() {
        assert_eq!(env_from(&[("LEADSCOUT_LOG", " INFO ")]).tracing_level(), Some(Level::INFO));
        assert_eq!(env_from(&[("LEADSCOUT_LOG", "chatty")]).tracing_level(), None);
        assert_eq!(env_from(&[]).tracing_level(), None);
    }

    #[test]
    fn test_report_lists_errors_before_warnings() {
        let validation = ConfigValidation {
            warnings: vec!["w".to_string()],
            errors: vec!["e".to_string()],
        };
        assert!(!validation.is_valid());
        assert_eq!(validation.report(), "Errors:\n  - e\nWarnings:\n  - w");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("nah"), None);
    }
}
