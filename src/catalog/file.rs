// src/catalog/file.rs
// Replacement catalogs loaded from TOML

use super::{CategoryCatalog, CategoryEntry};
use crate::error::{LeadScoutError, Result};
use leadscout_types::Taxonomy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// On-disk catalog layout
///
/// ```toml
/// default = ["Entrepreneur", "startups", "smallbusiness"]
///
/// [business."SaaS Companies"]
/// tier1 = ["SaaS", "startups", "Entrepreneur"]
/// tier2 = ["IndieHackers", "microSaaS", "EntrepreneurRideAlong"]
/// backup = ["IndieDev"]
/// keywords = ["saas", "mrr"]
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    default: Option<Vec<String>>,
    #[serde(default)]
    business: BTreeMap<String, EntryFile>,
    #[serde(default)]
    industry: BTreeMap<String, EntryFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryFile {
    tier1: Option<Vec<String>>,
    tier2: Option<Vec<String>>,
    tier3: Option<Vec<String>>,
    tier4: Option<Vec<String>>,
    #[serde(default)]
    backup: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
}

impl EntryFile {
    fn into_entry(self) -> CategoryEntry {
        let tiers = [self.tier1, self.tier2, self.tier3, self.tier4]
            .into_iter()
            .zip(1u8..)
            .filter_map(|(communities, tier)| communities.map(|c| (tier, c)))
            .collect();
        CategoryEntry {
            tiers,
            backup: self.backup,
            keywords: self.keywords,
        }
    }
}

impl CategoryCatalog {
    /// Parse and validate a catalog from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        if file.business.is_empty() && file.industry.is_empty() {
            return Err(LeadScoutError::Catalog(
                "catalog defines no categories".to_string(),
            ));
        }

        let mut catalog = CategoryCatalog::empty();
        if let Some(default) = file.default {
            catalog.set_default_communities(default)?;
        }
        for (taxonomy, entries) in [
            (Taxonomy::Business, file.business),
            (Taxonomy::Industry, file.industry),
        ] {
            for (name, entry) in entries {
                catalog.insert(taxonomy, name, entry.into_entry())?;
            }
        }
        Ok(catalog)
    }

    /// Load a catalog file, failing on any I/O, parse, or validation error
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            categories = catalog.len(),
            "Loaded category catalog from file"
        );
        Ok(catalog)
    }
}
