// src/config/mod.rs
// Configuration: ~/.leadscout/config.toml overlaid with LEADSCOUT_* env vars

pub mod env;
pub mod file;

pub use env::{ConfigValidation, EnvConfig};
pub use file::LeadScoutConfig;

use crate::allocator::{AllocationStrategy, Allocator};
use crate::catalog::CategoryCatalog;
use crate::error::Result;
use crate::ledger::{InMemoryLedger, RequestLedger};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Effective settings after merging file and environment (env wins)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedConfig {
    pub strategy: AllocationStrategy,
    pub catalog_path: Option<PathBuf>,
}

impl ResolvedConfig {
    pub fn merge(file: &LeadScoutConfig, env: &EnvConfig) -> Self {
        let kind = env
            .strategy_kind()
            .or(file.allocator.strategy)
            .unwrap_or_default();
        let include_backup = env
            .include_backup
            .or(file.allocator.include_backup)
            .unwrap_or(false);

        Self {
            strategy: AllocationStrategy::from_kind(kind, include_backup),
            catalog_path: env.catalog_path.clone().or_else(|| file.catalog.path.clone()),
        }
    }

    /// The configured catalog: the file at `catalog_path`, or the built-in table
    pub fn load_catalog(&self) -> Result<CategoryCatalog> {
        match self.catalog_path {
            Some(ref path) => CategoryCatalog::from_path(path),
            None => Ok(CategoryCatalog::builtin()),
        }
    }

    /// Allocator over the configured catalog with a fresh in-memory ledger
    pub fn build_allocator(&self) -> Result<Allocator> {
        let ledger: Arc<dyn RequestLedger> = Arc::new(InMemoryLedger::new());
        self.build_allocator_with(ledger)
    }

    /// Allocator over the configured catalog with a caller-owned ledger
    pub fn build_allocator_with(&self, ledger: Arc<dyn RequestLedger>) -> Result<Allocator> {
        let catalog = Arc::new(self.load_catalog()?);
        info!(
            strategy = self.strategy.kind().as_str(),
            categories = catalog.len(),
            "Allocator ready"
        );
        Ok(Allocator::new(catalog, ledger, self.strategy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::StrategyKind;
    use crate::error::LeadScoutError;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let resolved = ResolvedConfig::merge(&LeadScoutConfig::default(), &EnvConfig::default());
        assert_eq!(resolved.strategy, AllocationStrategy::Rotating);
        assert!(resolved.catalog_path.is_none());
    }

    #[test]
    fn test_file_values_apply() {
        let mut file = LeadScoutConfig::default();
        file.allocator.strategy = Some(StrategyKind::FixedTopTier);
        file.allocator.include_backup = Some(true);
        let resolved = ResolvedConfig::merge(&file, &EnvConfig::default());
        assert_eq!(
            resolved.strategy,
            AllocationStrategy::FixedTopTier {
                include_backup: true
            }
        );
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = LeadScoutConfig::default();
        file.allocator.strategy = Some(StrategyKind::FixedTopTier);
        file.catalog.path = Some(PathBuf::from("/from/file.toml"));
        let env = EnvConfig {
            strategy: Some("rotating".to_string()),
            catalog_path: Some(PathBuf::from("/from/env.toml")),
            ..Default::default()
        };
        let resolved = ResolvedConfig::merge(&file, &env);
        assert_eq!(resolved.strategy, AllocationStrategy::Rotating);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("/from/env.toml")));
    }

    #[test]
    fn test_invalid_env_strategy_falls_through_to_file() {
        let mut file = LeadScoutConfig::default();
        file.allocator.strategy = Some(StrategyKind::FixedTopTier);
        let env = EnvConfig {
            strategy: Some("beta".to_string()),
            ..Default::default()
        };
        let resolved = ResolvedConfig::merge(&file, &env);
        assert_eq!(resolved.strategy.kind(), StrategyKind::FixedTopTier);
    }

    #[test]
    fn test_build_allocator_builtin() {
        let allocator = ResolvedConfig::default().build_allocator().unwrap();
        assert!(allocator.catalog().contains("SaaS Companies"));
    }

    #[test]
    fn test_build_allocator_from_catalog_file() {
        let mut catalog = tempfile::NamedTempFile::new().unwrap();
        catalog
            .write_all(b"[industry.\"Logistics\"]\ntier1 = [\"logistics\", \"freight\"]\n")
            .unwrap();
        let resolved = ResolvedConfig {
            catalog_path: Some(catalog.path().to_path_buf()),
            ..Default::default()
        };
        let allocator = resolved.build_allocator().unwrap();
        assert!(allocator.catalog().contains("Logistics"));
        assert!(!allocator.catalog().contains("SaaS Companies"));
    }

    #[test]
    fn test_build_allocator_bad_catalog_is_error() {
        let resolved = ResolvedConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.toml")),
            ..Default::default()
        };
        assert!(matches!(
            resolved.build_allocator(),
            Err(LeadScoutError::Io(_))
        ));
    }
}
