// src/cli/simulate.rs
// Concurrent load simulation against a shared allocator

use anyhow::Result;
use leadscout::{Allocator, Principal};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
struct UserReport {
    principal: Principal,
    tiers: Vec<u8>,
    final_count: u64,
}

/// Spawn `users` tasks that each resolve `requests` times, then print one
/// JSON line per user
pub async fn run_simulate(
    allocator: Arc<Allocator>,
    category: String,
    users: usize,
    requests: usize,
    shared: bool,
) -> Result<()> {
    let shared_principal = Principal::new_session();
    info!(users, requests, shared, category = %category, "Starting simulation");

    let mut handles = Vec::with_capacity(users);
    for i in 0..users {
        let allocator = allocator.clone();
        let category = category.clone();
        let principal = if shared {
            shared_principal.clone()
        } else {
            Principal::session(format!("sim-{}", i))
        };

        handles.push(tokio::spawn(async move {
            let tiers: Vec<u8> = (0..requests)
                .map(|_| allocator.resolve(&category, &principal).tier)
                .collect();
            let final_count = allocator.get_count(&principal);
            UserReport {
                principal,
                tiers,
                final_count,
            }
        }));
    }

    for handle in handles {
        let report = handle.await?;
        println!("{}", serde_json::to_string(&report)?);
    }

    if shared {
        println!(
            "shared principal total: {} (expected {})",
            allocator.get_count(&shared_principal),
            users * requests
        );
    }
    Ok(())
}
