// src/main.rs
// leadscout - tiered community allocation for lead-generation searches

use anyhow::Result;
use clap::Parser;
use leadscout::config::{EnvConfig, LeadScoutConfig, ResolvedConfig};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;

use cli::{Cli, Commands};

fn log_level(verbose: bool, env: &EnvConfig) -> Level {
    if verbose {
        return Level::INFO;
    }
    env.tracing_level().unwrap_or(Level::WARN)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env files (global first, then project)
    let _ = dotenvy::from_path(LeadScoutConfig::config_dir().join(".env"));
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let env = EnvConfig::load();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose, &env))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Commands::Check = cli.command {
        return cli::run_check(&env);
    }

    let allocator = ResolvedConfig::merge(&LeadScoutConfig::load(), &env).build_allocator()?;

    match cli.command {
        Commands::Resolve {
            category,
            user,
            session,
            times,
        } => cli::run_resolve(&allocator, &category, user, session, times)?,
        Commands::Peek {
            category,
            request_number,
        } => cli::run_peek(&allocator, &category, request_number)?,
        Commands::Categories { taxonomy } => cli::run_categories(&allocator, taxonomy)?,
        Commands::Tiers { category } => cli::run_tiers(&allocator, &category)?,
        Commands::Simulate {
            category,
            users,
            requests,
            shared,
        } => cli::run_simulate(Arc::new(allocator), category, users, requests, shared).await?,
        Commands::Check => {}
    }

    Ok(())
}
