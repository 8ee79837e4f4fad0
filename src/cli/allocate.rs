// src/cli/allocate.rs
// One-shot allocation commands

use super::TaxonomyArg;
use anyhow::{Result, bail};
use leadscout::{Allocator, Principal, Taxonomy};

/// Resolve `times` consecutive requests and print each result as JSON
///
/// The ledger lives only as long as this process, so a fresh invocation
/// always starts the user at request 1.
pub fn run_resolve(
    allocator: &Allocator,
    category: &str,
    user: Option<String>,
    session: bool,
    times: u32,
) -> Result<()> {
    let principal = match (user, session) {
        (Some(id), false) => Principal::account(id),
        (Some(id), true) => Principal::session(id),
        (None, true) => Principal::new_session(),
        (None, false) => bail!("--user is required unless --session is given"),
    };

    for _ in 0..times.max(1) {
        let result = allocator.resolve(category, &principal);
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

pub fn run_peek(allocator: &Allocator, category: &str, request_number: u64) -> Result<()> {
    let result = allocator.peek(category, request_number);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub fn run_categories(allocator: &Allocator, taxonomy: Option<TaxonomyArg>) -> Result<()> {
    let taxonomies: Vec<Taxonomy> = match taxonomy {
        Some(t) => vec![t.into()],
        None => Taxonomy::ALL.to_vec(),
    };

    for taxonomy in taxonomies {
        println!("{}:", taxonomy.as_str());
        for name in allocator.valid_categories(taxonomy) {
            println!("  {}", name);
        }
    }
    Ok(())
}

pub fn run_tiers(allocator: &Allocator, category: &str) -> Result<()> {
    let catalog = allocator.catalog();
    let Some(entry) = catalog.entry(category) else {
        bail!(
            "Unknown category '{}'. Run `leadscout categories` to list valid names.",
            category
        );
    };

    println!("{}", category);
    for (tier, communities) in entry.tiers() {
        println!("  tier {}: {}", tier, communities.join(", "));
    }
    if !entry.backup().is_empty() {
        println!("  backup: {}", entry.backup().join(", "));
    }
    if !entry.keywords().is_empty() {
        println!("  keywords: {}", entry.keywords().join(", "));
    }
    Ok(())
}
