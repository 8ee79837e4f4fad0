// src/ledger.rs
// Per-user request counts that drive tier rotation
//
// Counts are volatile and per-process: a restart or a second instance starts
// every user from zero. Hard quota enforcement belongs in account storage.

use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use uuid::Uuid;

/// Ledger key
///
/// Account ids and anonymous session ids are separate namespaces, so an
/// account "42" and a session "42" never share a count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Principal {
    Account(String),
    Session(String),
}

impl Principal {
    pub fn account(id: impl Into<String>) -> Self {
        Principal::Account(id.into())
    }

    pub fn session(id: impl Into<String>) -> Self {
        Principal::Session(id.into())
    }

    /// Mint an opaque id for an anonymous visitor
    pub fn new_session() -> Self {
        Principal::Session(Uuid::new_v4().to_string())
    }

    pub fn id(&self) -> &str {
        match self {
            Principal::Account(id) | Principal::Session(id) => id,
        }
    }

    pub fn namespace(&self) -> &'static str {
        match self {
            Principal::Account(_) => "account",
            Principal::Session(_) => "session",
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace(), self.id())
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Principal::Account(id.to_string())
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Principal::Account(id)
    }
}

/// Store of per-principal request counts
///
/// Unknown principals read as zero. `increment` is the only way a count
/// grows and must be atomic per key.
pub trait RequestLedger: Send + Sync {
    fn get_count(&self, principal: &Principal) -> u64;

    /// Add one request and return the new count
    fn increment(&self, principal: &Principal) -> u64;

    /// Forget a principal, returning the count it had
    fn reset(&self, principal: &Principal) -> u64;

    /// Number of principals with an entry
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, sorted by principal
    fn snapshot(&self) -> Vec<(Principal, u64)>;
}

/// In-memory ledger with one atomic counter per principal
///
/// Increments on an existing key only take the shared read lock, so
/// different users never wait on each other. The write lock is held only to
/// insert a first-seen key or to reset one.
pub struct InMemoryLedger {
    counts: RwLock<HashMap<Principal, AtomicU64>>,
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            counts: RwLock::new(HashMap::new()),
        }
    }
}

impl RequestLedger for InMemoryLedger {
    fn get_count(&self, principal: &Principal) -> u64 {
        self.counts
            .read()
            .get(principal)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn increment(&self, principal: &Principal) -> u64 {
        {
            let counts = self.counts.read();
            if let Some(counter) = counts.get(principal) {
                let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(principal = %principal, count, "Incremented request count");
                return count;
            }
        }

        // First request for this principal; another thread may have inserted
        // it between the two locks, which `entry` handles.
        let mut counts = self.counts.write();
        let count = counts
            .entry(principal.clone())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed)
            + 1;
        debug!(principal = %principal, count, "Incremented request count");
        count
    }

    fn reset(&self, principal: &Principal) -> u64 {
        let previous = self
            .counts
            .write()
            .remove(principal)
            .map(|c| c.into_inner())
            .unwrap_or(0);
        debug!(principal = %principal, previous, "Reset request count");
        previous
    }

    fn len(&self) -> usize {
        self.counts.read().len()
    }

    fn snapshot(&self) -> Vec<(Principal, u64)> {
        let mut entries: Vec<_> = self
            .counts
            .read()
            .iter()
            .map(|(p, c)| (p.clone(), c.load(Ordering::Relaxed)))
            .collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_principal_reads_zero() {
        let ledger = InMemoryLedger::new();
        assert_eq!(ledger.get_count(&"nobody".into()), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_sequential_increments() {
        let ledger = InMemoryLedger::new();
        let user = Principal::account("u1");
        for expected in 1..=7 {
            assert_eq!(ledger.increment(&user), expected);
        }
        assert_eq!(ledger.get_count(&user), 7);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_get_count_does_not_create_entry() {
        let ledger = InMemoryLedger::new();
        ledger.get_count(&"u1".into());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_reset() {
        let ledger = InMemoryLedger::new();
        let user = Principal::account("u1");
        ledger.increment(&user);
        ledger.increment(&user);
        assert_eq!(ledger.reset(&user), 2);
        assert_eq!(ledger.get_count(&user), 0);
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.increment(&user), 1);

        // Resetting an unseen principal is a no-op
        assert_eq!(ledger.reset(&"ghost".into()), 0);
    }

    #[test]
    fn test_account_and_session_namespaces_are_separate() {
        let ledger = InMemoryLedger::new();
        let account = Principal::account("42");
        let session = Principal::session("42");
        ledger.increment(&account);
        ledger.increment(&account);
        ledger.increment(&session);
        assert_eq!(ledger.get_count(&account), 2);
        assert_eq!(ledger.get_count(&session), 1);
    }

    #[test]
    fn test_concurrent_increments_same_principal() {
        let ledger = InMemoryLedger::new();
        let user = Principal::account("hot");
        let threads = 16;
        let per_thread = 250;

        std::thread::scope(|s| {
            for _ in 0..threads {
                s.spawn(|| {
                    for _ in 0..per_thread {
                        ledger.increment(&user);
                    }
                });
            }
        });

        assert_eq!(ledger.get_count(&user), (threads * per_thread) as u64);
    }

    #[test]
    fn test_concurrent_increments_many_principals() {
        let ledger = InMemoryLedger::new();
        std::thread::scope(|s| {
            for t in 0..8 {
                let ledger = &ledger;
                s.spawn(move || {
                    for i in 0..50 {
                        ledger.increment(&Principal::session(format!("s{}", i % 5)));
                        ledger.increment(&Principal::account(format!("t{}", t)));
                    }
                });
            }
        });

        assert_eq!(ledger.get_count(&Principal::session("s0")), 80);
        assert_eq!(ledger.get_count(&Principal::account("t3")), 50);
        assert_eq!(ledger.len(), 13);
    }

    #[test]
    fn test_snapshot_sorted() {
        let ledger = InMemoryLedger::new();
        ledger.increment(&Principal::session("b"));
        ledger.increment(&Principal::account("z"));
        ledger.increment(&Principal::account("a"));
        let snapshot = ledger.snapshot();
        assert_eq!(
            snapshot,
            vec![
                (Principal::account("a"), 1),
                (Principal::account("z"), 1),
                (Principal::session("b"), 1),
            ]
        );
    }

    #[test]
    fn test_principal_display_and_new_session() {
        assert_eq!(Principal::account("u1").to_string(), "account:u1");
        let session = Principal::new_session();
        assert_eq!(session.namespace(), "session");
        assert_ne!(session, Principal::new_session());
        assert_eq!(Principal::from("x".to_string()), Principal::account("x"));
    }

    #[test]
    fn test_principal_serialize() {
        let json = serde_json::to_string(&Principal::session("abc")).unwrap();
        assert_eq!(json, r#"{"kind":"session","id":"abc"}"#);
    }
}
