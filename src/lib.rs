// src/lib.rs
// leadscout - tiered community allocation for lead-generation searches

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod allocator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ledger;

pub use allocator::{AllocationStrategy, Allocator, StrategyKind};
pub use catalog::CategoryCatalog;
pub use error::{LeadScoutError, Result};
pub use leadscout_types::{AllocationResult, AllocationSource, Taxonomy};
pub use ledger::{InMemoryLedger, Principal, RequestLedger};
