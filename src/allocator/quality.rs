// src/allocator/quality.rs
// Tier derivation, quality labels, and fetch quotas

use crate::catalog::TIER_COUNT;

/// Posts the fetch stage requests from each community
pub const POSTS_PER_COMMUNITY: u32 = 500;

/// Label for every result of the fixed-top-tier strategy
pub const FIXED_TOP_TIER_NOTE: &str = "Beta Quality - Most relevant subreddits for optimal results";

/// Label for the default set served to unknown categories
pub const DEFAULT_QUALITY_NOTE: &str =
    "Default Selection - Category not recognized, using general business communities";

/// Tier for a 1-based request number: 1, 2, 3, 4, 1, 2, ...
///
/// Request number 0 is treated as request 1.
pub fn tier_for_request(request_number: u64) -> u8 {
    let n = request_number.max(1);
    ((n - 1) % u64::from(TIER_COUNT) + 1) as u8
}

pub fn quality_note(tier: u8) -> &'static str {
    match tier {
        1 => "Premium Quality - Most relevant, highest-engagement communities",
        2 => "High Quality - Closely related niche communities",
        3 => "Good Quality - Adjacent communities with broader audiences",
        _ => "Extended Reach - General communities, lowest signal density",
    }
}

pub fn is_final_tier(tier: u8) -> bool {
    tier == TIER_COUNT
}

pub fn total_posts(community_count: usize) -> u32 {
    (community_count as u32).saturating_mul(POSTS_PER_COMMUNITY)
}
