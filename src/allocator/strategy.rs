// src/allocator/strategy.rs
// Selectable allocation strategies

use serde::{Deserialize, Serialize};

/// Strategy name as it appears in configuration
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::IntoStaticStr,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Cycle through tiers 1-4 on successive requests
    #[default]
    Rotating,
    /// Always serve tier 1 (beta phase)
    FixedTopTier,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// How an allocator maps a request to a community set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllocationStrategy {
    /// Tier derived from the request number, cycling 1..=4
    #[default]
    Rotating,
    /// Tier 1 regardless of request count, optionally extended with the
    /// category's backup communities
    FixedTopTier { include_backup: bool },
}

impl AllocationStrategy {
    pub fn from_kind(kind: StrategyKind, include_backup: bool) -> Self {
        match kind {
            StrategyKind::Rotating => AllocationStrategy::Rotating,
            StrategyKind::FixedTopTier => AllocationStrategy::FixedTopTier { include_backup },
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            AllocationStrategy::Rotating => StrategyKind::Rotating,
            AllocationStrategy::FixedTopTier { .. } => StrategyKind::FixedTopTier,
        }
    }
}
