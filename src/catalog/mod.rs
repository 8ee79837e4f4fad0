// src/catalog/mod.rs
// Category catalog: tiered community tables for business and industry types

pub mod builtin;
mod file;

use crate::error::{LeadScoutError, Result};
use leadscout_types::Taxonomy;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

pub use builtin::DEFAULT_COMMUNITIES;

/// Number of quality tiers per category
pub const TIER_COUNT: u8 = 4;

/// Tier table for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    tiers: BTreeMap<u8, Vec<String>>,
    backup: Vec<String>,
    keywords: Vec<String>,
}

impl CategoryEntry {
    /// Create an entry whose tier 1 is `primary`
    pub fn new(primary: Vec<String>) -> Self {
        let mut tiers = BTreeMap::new();
        tiers.insert(1, primary);
        Self {
            tiers,
            backup: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn with_tier(mut self, tier: u8, communities: Vec<String>) -> Self {
        self.tiers.insert(tier, communities);
        self
    }

    pub fn with_backup(mut self, backup: Vec<String>) -> Self {
        self.backup = backup;
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn tier(&self, tier: u8) -> Option<&[String]> {
        self.tiers.get(&tier).map(Vec::as_slice)
    }

    /// Defined tiers in ascending order
    pub fn tiers(&self) -> impl Iterator<Item = (u8, &[String])> {
        self.tiers.iter().map(|(tier, c)| (*tier, c.as_slice()))
    }

    /// Extra communities appended by the fixed-top-tier strategy on request
    pub fn backup(&self) -> &[String] {
        &self.backup
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.tiers.contains_key(&1) {
            return Err(LeadScoutError::Catalog(format!(
                "category '{}' has no tier 1",
                name
            )));
        }
        for (tier, communities) in &self.tiers {
            if !(1..=TIER_COUNT).contains(tier) {
                return Err(LeadScoutError::Catalog(format!(
                    "category '{}' defines tier {} (valid tiers are 1-{})",
                    name, tier, TIER_COUNT
                )));
            }
            if communities.is_empty() {
                return Err(LeadScoutError::Catalog(format!(
                    "category '{}' tier {} is empty",
                    name, tier
                )));
            }
        }
        Ok(())
    }
}

/// Result of a catalog lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLookup<'a> {
    /// Tier actually served (1 when `fell_back` is set)
    pub tier: u8,
    pub communities: &'a [String],
    /// The requested tier was missing and tier 1 was served instead
    pub fell_back: bool,
}

/// Read-only table of categories, one map per taxonomy
///
/// The two taxonomies are disjoint key spaces: a name may appear in only one
/// of them, though tier contents can overlap freely.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    business: BTreeMap<String, CategoryEntry>,
    industry: BTreeMap<String, CategoryEntry>,
    default_communities: Vec<String>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryCatalog {
    /// Catalog with no categories and the built-in default set
    pub fn empty() -> Self {
        Self {
            business: BTreeMap::new(),
            industry: BTreeMap::new(),
            default_communities: DEFAULT_COMMUNITIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The static table compiled into the binary
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for (taxonomy, table) in [
            (Taxonomy::Business, builtin::BUSINESS),
            (Taxonomy::Industry, builtin::INDUSTRY),
        ] {
            let map = catalog.map_mut(taxonomy);
            for category in table {
                let mut entry = CategoryEntry::new(to_strings(&category.tiers[0]))
                    .with_backup(to_strings(category.backup))
                    .with_keywords(to_strings(category.keywords));
                for (idx, tier) in category.tiers.iter().enumerate().skip(1) {
                    entry = entry.with_tier(idx as u8 + 1, to_strings(tier));
                }
                map.insert(category.name.to_string(), entry);
            }
        }
        debug!(
            business = catalog.business.len(),
            industry = catalog.industry.len(),
            "Loaded built-in category catalog"
        );
        catalog
    }

    /// Add or replace a category
    ///
    /// Fails if the entry has no tier 1, has a tier outside 1-4 or an empty
    /// tier, or if the name already belongs to the other taxonomy.
    pub fn insert(
        &mut self,
        taxonomy: Taxonomy,
        name: impl Into<String>,
        entry: CategoryEntry,
    ) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LeadScoutError::Catalog("category name is empty".to_string()));
        }
        entry.validate(&name)?;

        let other = match taxonomy {
            Taxonomy::Business => Taxonomy::Industry,
            Taxonomy::Industry => Taxonomy::Business,
        };
        if self.map(other).contains_key(&name) {
            return Err(LeadScoutError::Catalog(format!(
                "category '{}' already defined as {} type",
                name,
                other.as_str()
            )));
        }

        self.map_mut(taxonomy).insert(name, entry);
        Ok(())
    }

    /// Replace the set served for unknown categories
    pub fn set_default_communities(&mut self, communities: Vec<String>) -> Result<()> {
        if communities.is_empty() {
            return Err(LeadScoutError::Catalog(
                "default community set is empty".to_string(),
            ));
        }
        self.default_communities = communities;
        Ok(())
    }

    pub fn default_communities(&self) -> &[String] {
        &self.default_communities
    }

    fn map(&self, taxonomy: Taxonomy) -> &BTreeMap<String, CategoryEntry> {
        match taxonomy {
            Taxonomy::Business => &self.business,
            Taxonomy::Industry => &self.industry,
        }
    }

    fn map_mut(&mut self, taxonomy: Taxonomy) -> &mut BTreeMap<String, CategoryEntry> {
        match taxonomy {
            Taxonomy::Business => &mut self.business,
            Taxonomy::Industry => &mut self.industry,
        }
    }

    /// Find a category in either taxonomy (business first)
    pub fn entry(&self, category: &str) -> Option<&CategoryEntry> {
        self.business
            .get(category)
            .or_else(|| self.industry.get(category))
    }

    pub fn taxonomy_of(&self, category: &str) -> Option<Taxonomy> {
        Taxonomy::ALL
            .into_iter()
            .find(|t| self.map(*t).contains_key(category))
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entry(category).is_some()
    }

    /// Communities for `(category, tier)`
    ///
    /// Returns `None` only for unknown categories. A tier the category does
    /// not define falls back to tier 1.
    pub fn lookup(&self, category: &str, tier: u8) -> Option<TierLookup<'_>> {
        let entry = self.entry(category)?;
        if let Some(communities) = entry.tier(tier) {
            return Some(TierLookup {
                tier,
                communities,
                fell_back: false,
            });
        }

        warn!(
            category = %category,
            requested_tier = tier,
            "Tier missing from catalog, falling back to tier 1"
        );
        entry.tier(1).map(|communities| TierLookup {
            tier: 1,
            communities,
            fell_back: true,
        })
    }

    /// Category names accepted for a taxonomy (for request validation)
    ///
    /// Names come back in alphabetical order, not catalog declaration order.
    pub fn valid_categories(&self, taxonomy: Taxonomy) -> BTreeSet<String> {
        self.map(taxonomy).keys().cloned().collect()
    }

    pub fn is_valid(&self, taxonomy: Taxonomy, category: &str) -> bool {
        self.map(taxonomy).contains_key(category)
    }

    /// Content keywords for a category, empty when unknown
    pub fn keywords(&self, category: &str) -> &[String] {
        self.entry(category).map(CategoryEntry::keywords).unwrap_or(&[])
    }

    /// Backup communities for a category, empty when unknown
    pub fn backup(&self, category: &str) -> &[String] {
        self.entry(category).map(CategoryEntry::backup).unwrap_or(&[])
    }

    /// Total categories across both taxonomies
    pub fn len(&self) -> usize {
        self.business.len() + self.industry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
