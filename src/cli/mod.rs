// src/cli/mod.rs
// CLI module for leadscout commands

use clap::{Parser, Subcommand, ValueEnum};
use leadscout::Taxonomy;

pub mod allocate;
pub mod check;
pub mod simulate;

pub use allocate::{run_categories, run_peek, run_resolve, run_tiers};
pub use check::run_check;
pub use simulate::run_simulate;

#[derive(Parser)]
#[command(name = "leadscout")]
#[command(about = "Tiered community allocation for lead-generation searches")]
#[command(version)]
pub struct Cli {
    /// Log at info level (overrides LEADSCOUT_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Allocate communities for a user's next request(s)
    Resolve {
        /// Business or industry category
        category: String,

        /// Account id (or session id with --session)
        #[arg(short, long)]
        user: Option<String>,

        /// Treat --user as an anonymous session id; mints one if --user is omitted
        #[arg(long)]
        session: bool,

        /// Number of consecutive requests to resolve
        #[arg(short, long, default_value = "1")]
        times: u32,
    },

    /// Show the allocation for a request number without counting it
    Peek {
        category: String,

        /// 1-based request number
        request_number: u64,
    },

    /// List valid categories
    Categories {
        /// Limit to one taxonomy
        #[arg(value_enum)]
        taxonomy: Option<TaxonomyArg>,
    },

    /// Show a category's full tier table
    Tiers { category: String },

    /// Run concurrent simulated users against one allocator
    Simulate {
        category: String,

        /// Number of concurrent users
        #[arg(long, default_value = "4")]
        users: usize,

        /// Requests per user
        #[arg(long, default_value = "8")]
        requests: usize,

        /// All simulated users share one session id
        #[arg(long)]
        shared: bool,
    },

    /// Validate configuration and catalog
    Check,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TaxonomyArg {
    Business,
    Industry,
}

impl From<TaxonomyArg> for Taxonomy {
    fn from(arg: TaxonomyArg) -> Self {
        match arg {
            TaxonomyArg::Business => Taxonomy::Business,
            TaxonomyArg::Industry => Taxonomy::Industry,
        }
    }
}
