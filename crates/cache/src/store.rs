//! In-memory key/value store with per-entry expiration.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;

#[derive(Debug)]
struct Entry<V> {
    value: V,
    /// `None` when `ttl` is too large to represent as a deadline.
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

/// Snapshot of store occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Entries held, including expired ones not yet reclaimed.
    pub total: usize,
    /// Entries that would be served by `get`.
    pub live: usize,
    /// Entries past their deadline.
    pub expired: usize,
}

/// Thread-safe map from raw string keys to values that expire a fixed
/// duration after insertion.
///
/// Values are cloned out on every read. Expired entries are never returned,
/// whether or not [`purge_expired`](Self::purge_expired) has run since.
#[derive(Debug)]
pub struct ExpiringStore<V> {
    entries: RwLock<HashMap<String, Entry<V>>>,
    ttl: Duration,
}

impl<V: Clone> ExpiringStore<V> {
    /// Create an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self { entries: RwLock::new(HashMap::new()), ttl }
    }

    /// Time-to-live applied to each insert.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get a copy of the live value stored under `key`.
    ///
    /// An expired entry found here is removed and reported as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();

        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        // Re-check under the write lock: a concurrent insert may have replaced the entry.
        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        None
    }

    /// Store `value` under `key` with a fresh deadline, replacing any previous entry.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let expires_at = Instant::now().checked_add(self.ttl);
        self.entries.write().insert(key.into(), Entry { value, expires_at });
    }

    /// Remove every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Number of entries held, including expired ones not yet reclaimed.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Count total, live and expired entries as of now.
    pub fn stats(&self) -> StoreStats {
        let now = Instant::now();
        let entries = self.entries.read();
        let expired = entries.values().filter(|e| e.is_expired(now)).count();
        StoreStats { total: entries.len(), live: entries.len() - expired, expired }
    }
}
