// crates/leadscout-types/src/lib.rs
// Shared types for leadscout
// No native-only dependencies allowed here

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════
// CATEGORY TAXONOMIES
// ═══════════════════════════════════════

/// Which of the two category key spaces a category belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Taxonomy {
    /// Business types ("SaaS Companies", "App Developers", ...)
    Business,
    /// Industry types ("SaaS / Tech", "E-commerce", ...)
    Industry,
}

impl Taxonomy {
    pub const ALL: [Taxonomy; 2] = [Taxonomy::Business, Taxonomy::Industry];

    pub fn as_str(&self) -> &'static str {
        match self {
            Taxonomy::Business => "business",
            Taxonomy::Industry => "industry",
        }
    }
}

// ═══════════════════════════════════════
// ALLOCATION RESULTS
// ═══════════════════════════════════════

/// Where the community set in an allocation came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AllocationSource {
    /// The requested tier of a known category
    Catalog,
    /// Known category, but the requested tier was missing so tier 1 was used
    TierFallback,
    /// Unknown category, the fixed default set was used
    Default,
}

/// Communities selected for one search request plus quota metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationResult {
    /// Category as given by the caller
    pub category: String,
    /// Request sequence number the tier was derived from (1-based)
    pub request_number: u64,
    /// Quality tier, 1 (best) through 4
    pub tier: u8,
    /// Community identifiers, in scan order
    pub communities: Vec<String>,
    /// Human-readable quality label for the tier
    pub quality_note: String,
    pub is_final_tier: bool,
    /// Posts the fetch stage should request from each community
    pub posts_per_community: u32,
    /// `communities.len() * posts_per_community`
    pub total_posts: u32,
    #[serde(default = "default_source")]
    pub source: AllocationSource,
}

fn default_source() -> AllocationSource {
    AllocationSource::Catalog
}

impl AllocationResult {
    /// True when the result did not come straight from the requested tier
    pub fn is_degraded(&self) -> bool {
        self.source != AllocationSource::Catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AllocationResult {
        AllocationResult {
            category: "SaaS Companies".to_string(),
            request_number: 2,
            tier: 2,
            communities: vec!["IndieHackers".to_string(), "microSaaS".to_string()],
            quality_note: "High Quality".to_string(),
            is_final_tier: false,
            posts_per_community: 500,
            total_posts: 1000,
            source: AllocationSource::Catalog,
        }
    }

    #[test]
    fn test_taxonomy_serialize() {
        let json = serde_json::to_string(&Taxonomy::Industry).unwrap();
        assert_eq!(json, "\"industry\"");
        let parsed: Taxonomy = serde_json::from_str("\"business\"").unwrap();
        assert_eq!(parsed, Taxonomy::Business);
    }

    #[test]
    fn test_taxonomy_as_str_matches_serde() {
        for taxonomy in Taxonomy::ALL {
            let json = serde_json::to_string(&taxonomy).unwrap();
            assert_eq!(json, format!("\"{}\"", taxonomy.as_str()));
        }
    }

    #[test]
    fn test_allocation_result_serialize() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"tier\":2"));
        assert!(json.contains("\"is_final_tier\":false"));
        assert!(json.contains("\"total_posts\":1000"));
        assert!(json.contains("\"source\":\"catalog\""));
    }

    #[test]
    fn test_allocation_result_missing_source_defaults_to_catalog() {
        let json = r#"{
            "category": "E-commerce",
            "request_number": 1,
            "tier": 1,
            "communities": ["ecommerce"],
            "quality_note": "Premium",
            "is_final_tier": false,
            "posts_per_community": 500,
            "total_posts": 500
        }"#;
        let result: AllocationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.source, AllocationSource::Catalog);
        assert!(!result.is_degraded());
    }

    #[test]
    fn test_is_degraded() {
        let mut result = sample();
        result.source = AllocationSource::Default;
        assert!(result.is_degraded());
        result.source = AllocationSource::TierFallback;
        assert!(result.is_degraded());
    }
}
