// src/cli/check.rs
// Configuration check

use anyhow::{Result, bail};
use leadscout::config::{EnvConfig, LeadScoutConfig, ResolvedConfig};

/// Print the effective configuration and fail if it cannot produce an allocator
pub fn run_check(env: &EnvConfig) -> Result<()> {
    let file = LeadScoutConfig::load();
    let resolved = ResolvedConfig::merge(&file, env);

    println!("Config file: {}", LeadScoutConfig::config_path().display());
    println!("Strategy:    {:?}", resolved.strategy);
    match resolved.catalog_path {
        Some(ref path) => println!("Catalog:     {}", path.display()),
        None => println!("Catalog:     built-in"),
    }

    let validation = env.validate();
    println!("{}", validation.report());
    if !validation.is_valid() {
        bail!("configuration has errors");
    }

    let catalog = resolved.load_catalog()?;
    println!("Categories:  {}", catalog.len());
    Ok(())
}
