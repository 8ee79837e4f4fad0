// src/allocator/mod.rs
// Per-user tiered community allocation

pub mod quality;
pub mod strategy;

use crate::catalog::{CategoryCatalog, TierLookup};
use crate::ledger::{InMemoryLedger, Principal, RequestLedger};
use leadscout_types::{AllocationResult, AllocationSource, Taxonomy};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use quality::{
    DEFAULT_QUALITY_NOTE, FIXED_TOP_TIER_NOTE, POSTS_PER_COMMUNITY, tier_for_request,
};
pub use strategy::{AllocationStrategy, StrategyKind};

/// Resolves (category, user) pairs to community sets
///
/// The catalog is shared read-only; the ledger is injected so callers decide
/// whether counts are shared between allocators. No operation fails: unknown
/// categories get the catalog's default set and unknown users count as zero.
pub struct Allocator {
    catalog: Arc<CategoryCatalog>,
    ledger: Arc<dyn RequestLedger>,
    strategy: AllocationStrategy,
}

impl Allocator {
    pub fn new(
        catalog: Arc<CategoryCatalog>,
        ledger: Arc<dyn RequestLedger>,
        strategy: AllocationStrategy,
    ) -> Self {
        Self {
            catalog,
            ledger,
            strategy,
        }
    }

    /// Built-in catalog with a fresh in-memory ledger
    pub fn in_memory(strategy: AllocationStrategy) -> Self {
        Self::new(
            Arc::new(CategoryCatalog::builtin()),
            Arc::new(InMemoryLedger::new()),
            strategy,
        )
    }

    pub fn strategy(&self) -> AllocationStrategy {
        self.strategy
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &Arc<dyn RequestLedger> {
        &self.ledger
    }

    /// Allocate for one logical request
    ///
    /// Counts the request against `principal` and allocates for the new
    /// count. Call exactly once per request.
    pub fn resolve(&self, category: &str, principal: &Principal) -> AllocationResult {
        let request_number = self.ledger.increment(principal);
        let result = self.allocate(category, request_number);
        info!(
            principal = %principal,
            category = %category,
            request_number,
            tier = result.tier,
            communities = result.communities.len(),
            "Resolved allocation"
        );
        result
    }

    /// Allocation for a given request number, without touching the ledger
    pub fn peek(&self, category: &str, request_number: u64) -> AllocationResult {
        self.allocate(category, request_number)
    }

    pub fn get_count(&self, principal: &Principal) -> u64 {
        self.ledger.get_count(principal)
    }

    pub fn increment(&self, principal: &Principal) -> u64 {
        self.ledger.increment(principal)
    }

    /// Restart a principal's rotation; the next `resolve` serves tier 1
    pub fn reset(&self, principal: &Principal) {
        let previous = self.ledger.reset(principal);
        info!(principal = %principal, previous, "Request count reset");
    }

    pub fn valid_categories(&self, taxonomy: Taxonomy) -> BTreeSet<String> {
        self.catalog.valid_categories(taxonomy)
    }

    fn allocate(&self, category: &str, request_number: u64) -> AllocationResult {
        let request_number = request_number.max(1);
        match self.strategy {
            AllocationStrategy::Rotating => self.rotating(category, request_number),
            AllocationStrategy::FixedTopTier { include_backup } => {
                self.fixed_top_tier(category, request_number, include_backup)
            }
        }
    }

    fn rotating(&self, category: &str, request_number: u64) -> AllocationResult {
        let tier = tier_for_request(request_number);
        match self.catalog.lookup(category, tier) {
            Some(served) => {
                let source = source_of(&served);
                build_result(
                    category,
                    request_number,
                    served.tier,
                    served.communities.to_vec(),
                    quality::quality_note(served.tier),
                    quality::is_final_tier(served.tier),
                    source,
                )
            }
            None => self.default_result(category, request_number),
        }
    }

    fn fixed_top_tier(
        &self,
        category: &str,
        request_number: u64,
        include_backup: bool,
    ) -> AllocationResult {
        let Some(served) = self.catalog.lookup(category, 1) else {
            return self.default_result(category, request_number);
        };

        let mut communities = served.communities.to_vec();
        if include_backup {
            communities.extend(self.catalog.backup(category).iter().cloned());
        }
        debug!(
            category = %category,
            include_backup,
            communities = communities.len(),
            "Fixed top tier allocation"
        );

        // Only tier 1 is ever exposed, so it is also the last tier
        build_result(
            category,
            request_number,
            1,
            communities,
            FIXED_TOP_TIER_NOTE,
            true,
            AllocationSource::Catalog,
        )
    }

    fn default_result(&self, category: &str, request_number: u64) -> AllocationResult {
        warn!(
            category = %category,
            "Category not found in catalog, using default communities"
        );
        build_result(
            category,
            request_number,
            1,
            self.catalog.default_communities().to_vec(),
            DEFAULT_QUALITY_NOTE,
            true,
            AllocationSource::Default,
        )
    }
}

fn source_of(served: &TierLookup<'_>) -> AllocationSource {
    if served.fell_back {
        AllocationSource::TierFallback
    } else {
        AllocationSource::Catalog
    }
}

fn build_result(
    category: &str,
    request_number: u64,
    tier: u8,
    communities: Vec<String>,
    quality_note: &str,
    is_final_tier: bool,
    source: AllocationSource,
) -> AllocationResult {
    AllocationResult {
        category: category.to_string(),
        request_number,
        tier,
        total_posts: quality::total_posts(communities.len()),
        communities,
        quality_note: quality_note.to_string(),
        is_final_tier,
        posts_per_community: POSTS_PER_COMMUNITY,
        source,
    }
}
